//! Core application state

mod mode;
mod state;

pub use mode::{Dialog, DialogChoice, Mode, PendingAction};
pub use state::{AppState, NavigationState};
