//! Backup copy engine contract
//!
//! The UI only triggers operations and displays progress; everything about
//! how bytes move lives behind this trait. A copy is not cancellable once
//! started; the engine reports pass/fail and the UI returns to browsing.

mod fs;

pub use fs::FsEngine;

use std::path::Path;

use crate::error::Result;
use crate::provider::Title;

/// Progress callback: `(bytes_done, bytes_total, label)`, invoked once per
/// copied chunk. `bytes_done` may briefly exceed `bytes_total` if the source
/// grows mid-copy; renderers clamp.
pub type ProgressFn<'a> = dyn FnMut(u64, u64, &str) + 'a;

/// Copy engine for whole-title snapshots
pub trait BackupEngine {
    /// Copy a title's live save data into the (fresh) backup directory
    /// `dest`. Returns the number of bytes copied.
    fn backup(&self, title: &Title, dest: &Path, progress: &mut ProgressFn) -> Result<u64>;

    /// Replace a title's live save data with the snapshot at `backup`.
    /// Returns the number of bytes copied.
    fn restore(&self, backup: &Path, title: &Title, progress: &mut ProgressFn) -> Result<u64>;

    /// Remove a snapshot directory
    fn delete_backup(&self, backup: &Path) -> Result<()>;
}
