//! Application module
//!
//! Configuration, the main event loop, and the non-interactive modes.

mod batch;
mod config;
mod config_file;
mod event_loop;
mod render;
mod report;

pub use batch::run_batch_backup;
pub use config::{Config, ListFormat};
pub use config_file::ConfigFile;
pub use event_loop::{run_app, AppResult};
pub use report::run_list;

/// Process exit codes
pub mod exit_code {
    /// Normal exit
    pub const SUCCESS: i32 = 0;
    /// Runtime error
    pub const ERROR: i32 = 1;
    /// Invalid arguments
    pub const INVALID: i32 = 3;
}
