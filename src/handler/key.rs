//! Keyboard event handling

use crossterm::event::{KeyCode, KeyEvent};

use crate::core::{AppState, Mode};
use crate::nav::Direction;

/// Actions that can result from key handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// No action needed
    None,
    /// Quit the application
    Quit,
    /// Move the active cursor
    Move(Direction),
    /// Enter the focused title's backup list
    EnterScroll,
    /// Leave the backup list back to the grid
    Leave,
    /// Toggle selection mark on the focused title
    ToggleMark,
    /// Select all titles, or clear if all are selected
    SelectAll,
    /// Clear all selection marks
    ClearMarks,
    /// Ask to back up the selection (or the focused title)
    TriggerBackup,
    /// Ask to restore the highlighted backup
    TriggerRestore,
    /// Ask to delete the highlighted backup
    DeleteBackup,
    /// Switch to the next user
    NextUser,
    /// Switch to the previous user
    PrevUser,
    /// Rescan the library
    Refresh,
    /// Show help popup
    ShowHelp,
    /// Close help popup
    CloseHelp,
    /// Resolve the dialog with its highlighted choice
    DialogConfirm,
    /// Resolve the dialog with yes
    DialogAccept,
    /// Resolve the dialog with no
    DialogCancel,
    /// Move the dialog button focus
    DialogToggle,
}

/// Handle key event and return the resulting action
pub fn handle_key_event(state: &AppState, key: KeyEvent) -> KeyAction {
    if state.dialog.is_some() {
        return handle_dialog_keys(key);
    }
    if state.help_visible {
        return handle_help_keys(key);
    }
    handle_navigation_keys(state, key)
}

/// Keys while the confirmation dialog is up.
///
/// The dialog consumes every key: exactly one of accept/cancel ends it.
fn handle_dialog_keys(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter => KeyAction::DialogConfirm,
        KeyCode::Char('y') | KeyCode::Char('Y') => KeyAction::DialogAccept,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => KeyAction::DialogCancel,
        KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::Char('h') | KeyCode::Char('l') => {
            KeyAction::DialogToggle
        }
        _ => KeyAction::None,
    }
}

fn handle_help_keys(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => {
            KeyAction::CloseHelp
        }
        _ => KeyAction::None,
    }
}

/// Keys in Browse and Scroll mode
fn handle_navigation_keys(state: &AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Esc | KeyCode::Char('b') => {
            if state.nav.mode() == Mode::Scroll {
                KeyAction::Leave
            } else if !state.nav.selection.is_empty() {
                KeyAction::ClearMarks
            } else {
                KeyAction::None
            }
        }

        // Navigation (routed to the active navigator by the action layer)
        KeyCode::Up | KeyCode::Char('k') => KeyAction::Move(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => KeyAction::Move(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => KeyAction::Move(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => KeyAction::Move(Direction::Right),

        KeyCode::Enter => KeyAction::EnterScroll,

        // Selection
        KeyCode::Char(' ') => KeyAction::ToggleMark,
        KeyCode::Char('a') => KeyAction::SelectAll,

        // Backup operations
        KeyCode::Char('s') => KeyAction::TriggerBackup,
        KeyCode::Char('r') => KeyAction::TriggerRestore,
        KeyCode::Char('d') | KeyCode::Delete => KeyAction::DeleteBackup,

        // Users
        KeyCode::Char(']') => KeyAction::NextUser,
        KeyCode::Char('[') => KeyAction::PrevUser,

        KeyCode::Char('R') | KeyCode::F(5) => KeyAction::Refresh,
        KeyCode::Char('?') => KeyAction::ShowHelp,

        _ => KeyAction::None,
    }
}
