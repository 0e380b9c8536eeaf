//! Action execution handler
//!
//! Translates [`KeyAction`]s into state changes. Copy operations are not run
//! here: accepting a confirmation dialog yields [`ActionResult::Execute`] and
//! the event loop performs the copy so it can draw progress frames.

mod backup;
#[cfg(test)]
mod tests;

pub use backup::execute_pending;

use crate::core::{AppState, DialogChoice, PendingAction};
use crate::error::Result;
use crate::handler::key::KeyAction;
use crate::provider::{AccountProvider, FsLibrary, TitleProvider};

/// Result of action execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    /// Continue the event loop
    Continue,
    /// Quit with the given exit code
    Quit(i32),
    /// Run a confirmed backup operation
    Execute(PendingAction),
}

/// Handle a KeyAction and update state accordingly
pub fn handle_action(
    action: KeyAction,
    state: &mut AppState,
    library: &mut FsLibrary,
) -> Result<ActionResult> {
    let title_count = library.title_count();

    match action {
        KeyAction::None => {}
        KeyAction::Quit => return Ok(ActionResult::Quit(crate::app::exit_code::SUCCESS)),

        KeyAction::Move(dir) => state.nav.step(dir, title_count),

        KeyAction::EnterScroll => {
            let backups = library.backups(state.nav.grid.full_index()).len();
            if !state.nav.enter_scroll(title_count, backups) {
                if title_count == 0 {
                    state.set_message("No titles found");
                } else {
                    state.set_message("No backups for this title yet");
                }
            }
        }
        KeyAction::Leave => state.nav.leave_scroll(),

        KeyAction::ToggleMark => state.nav.toggle_selected(title_count),
        KeyAction::SelectAll => {
            if title_count > 0 {
                let all_marked = (0..title_count).all(|i| state.nav.selection.contains(i));
                if all_marked {
                    state.nav.selection.clear();
                    state.set_message("Cleared selection");
                } else {
                    for i in 0..title_count {
                        if !state.nav.selection.contains(i) {
                            state.nav.selection.toggle(i);
                        }
                    }
                    state.set_message(format!("Selected {} title(s)", title_count));
                }
            }
        }
        KeyAction::ClearMarks => {
            state.nav.selection.clear();
            state.set_message("Cleared selection");
        }

        KeyAction::TriggerBackup => backup::request_backup(state, library),
        KeyAction::TriggerRestore => backup::request_restore(state, library),
        KeyAction::DeleteBackup => backup::request_delete(state, library),

        KeyAction::NextUser => {
            if library.next_user() {
                switch_user(state, library);
            }
        }
        KeyAction::PrevUser => {
            if library.prev_user() {
                switch_user(state, library);
            }
        }

        KeyAction::Refresh => {
            library.rescan()?;
            state.set_message("Library rescanned");
        }

        KeyAction::ShowHelp => state.help_visible = true,
        KeyAction::CloseHelp => state.help_visible = false,

        KeyAction::DialogToggle => {
            if let Some(dialog) = state.dialog.as_mut() {
                dialog.toggle_choice();
            }
        }
        KeyAction::DialogAccept => {
            if let Some(dialog) = state.dialog.take() {
                return Ok(ActionResult::Execute(dialog.action));
            }
        }
        KeyAction::DialogCancel => {
            state.dialog = None;
        }
        KeyAction::DialogConfirm => {
            if let Some(dialog) = state.dialog.take() {
                if dialog.choice == DialogChoice::Yes {
                    return Ok(ActionResult::Execute(dialog.action));
                }
            }
        }
    }

    Ok(ActionResult::Continue)
}

/// Shared cleanup after the active user changed
fn switch_user(state: &mut AppState, library: &FsLibrary) {
    state.nav.reset();
    let name = library
        .user_name(library.active_user())
        .unwrap_or("-")
        .to_string();
    state.set_message(format!("User: {}", name));
}
