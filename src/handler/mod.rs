//! Input handling: key events and action execution

pub mod action;
pub mod key;

pub use action::{handle_action, ActionResult};
pub use key::{handle_key_event, KeyAction};
