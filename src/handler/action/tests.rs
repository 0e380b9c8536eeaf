//! Tests for action handlers

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::core::{AppState, Mode, PendingAction};
use crate::engine::{BackupEngine, FsEngine, ProgressFn};
use crate::error::{Result, SavepointError};
use crate::handler::key::KeyAction;
use crate::nav::Direction;
use crate::provider::{FsLibrary, Title, TitleProvider};

use super::{execute_pending, handle_action, ActionResult};

fn fixture() -> (TempDir, FsLibrary) {
    let temp = TempDir::new().unwrap();
    let saves = temp.path().join("saves");
    for title in ["metroid", "pokemon", "zelda"] {
        fs::create_dir_all(saves.join("alice").join(title)).unwrap();
        fs::write(saves.join("alice").join(title).join("game.sav"), b"save").unwrap();
    }
    fs::create_dir_all(temp.path().join("backups/alice/zelda/20250101-120000")).unwrap();
    fs::write(
        temp.path().join("backups/alice/zelda/20250101-120000/game.sav"),
        b"old",
    )
    .unwrap();
    let library = FsLibrary::scan(&saves, &temp.path().join("backups")).unwrap();
    (temp, library)
}

fn state_for(library: &FsLibrary) -> AppState {
    let mut state = AppState::new(5, 6, false);
    let backups = library.backups(0).len();
    state.nav.sync_focus(library.title_count(), backups);
    state
}

fn focus(state: &mut AppState, library: &FsLibrary, title: usize) {
    state.nav.grid.set_full_index(title);
    let backups = library.backups(title).len();
    state.nav.sync_focus(library.title_count(), backups);
}

/// Engine stub that always fails, for the error-message path
struct BrokenEngine;

impl BackupEngine for BrokenEngine {
    fn backup(&self, _title: &Title, _dest: &Path, _progress: &mut ProgressFn) -> Result<u64> {
        Err(SavepointError::engine("disk on fire"))
    }

    fn restore(&self, _backup: &Path, _title: &Title, _progress: &mut ProgressFn) -> Result<u64> {
        Err(SavepointError::engine("disk on fire"))
    }

    fn delete_backup(&self, _backup: &Path) -> Result<()> {
        Err(SavepointError::engine("disk on fire"))
    }
}

#[test]
fn test_move_routes_to_grid_in_browse() {
    let (_temp, mut library) = fixture();
    let mut state = state_for(&library);
    let result = handle_action(KeyAction::Move(Direction::Right), &mut state, &mut library).unwrap();
    assert_eq!(result, ActionResult::Continue);
    assert_eq!(state.nav.grid.full_index(), 1);
}

#[test]
fn test_enter_scroll_refused_without_backups() {
    let (_temp, mut library) = fixture();
    let mut state = state_for(&library);
    // Title 0 (metroid) has no backups
    handle_action(KeyAction::EnterScroll, &mut state, &mut library).unwrap();
    assert_eq!(state.nav.mode(), Mode::Browse);
    assert_eq!(state.message.as_deref(), Some("No backups for this title yet"));
}

#[test]
fn test_enter_scroll_on_title_with_backups() {
    let (_temp, mut library) = fixture();
    let mut state = state_for(&library);
    focus(&mut state, &library, 2); // zelda
    handle_action(KeyAction::EnterScroll, &mut state, &mut library).unwrap();
    assert_eq!(state.nav.mode(), Mode::Scroll);
}

#[test]
fn test_toggle_and_select_all() {
    let (_temp, mut library) = fixture();
    let mut state = state_for(&library);
    handle_action(KeyAction::ToggleMark, &mut state, &mut library).unwrap();
    assert!(state.nav.selection.contains(0));

    handle_action(KeyAction::SelectAll, &mut state, &mut library).unwrap();
    assert_eq!(state.nav.selection.len(), 3);

    // Second select-all with everything marked clears the set
    handle_action(KeyAction::SelectAll, &mut state, &mut library).unwrap();
    assert!(state.nav.selection.is_empty());
}

#[test]
fn test_backup_trigger_disarmed_in_browse() {
    let (_temp, mut library) = fixture();
    let mut state = state_for(&library);
    handle_action(KeyAction::TriggerBackup, &mut state, &mut library).unwrap();
    assert!(state.dialog.is_none());
    assert_eq!(state.message.as_deref(), Some("Enter a title before backing up"));
}

#[test]
fn test_backup_dialog_accept_and_cancel() {
    let (_temp, mut library) = fixture();
    let mut state = state_for(&library);
    focus(&mut state, &library, 2);
    handle_action(KeyAction::EnterScroll, &mut state, &mut library).unwrap();
    handle_action(KeyAction::TriggerBackup, &mut state, &mut library).unwrap();
    let dialog = state.dialog.clone().unwrap();
    assert_eq!(dialog.prompt, "Backup zelda?");

    // Cancel closes without executing
    let result = handle_action(KeyAction::DialogCancel, &mut state, &mut library).unwrap();
    assert_eq!(result, ActionResult::Continue);
    assert!(state.dialog.is_none());

    // Accept yields the pending operation exactly once
    handle_action(KeyAction::TriggerBackup, &mut state, &mut library).unwrap();
    let result = handle_action(KeyAction::DialogAccept, &mut state, &mut library).unwrap();
    assert_eq!(
        result,
        ActionResult::Execute(PendingAction::Backup { targets: vec![2] })
    );
    assert!(state.dialog.is_none());
}

#[test]
fn test_dialog_confirm_follows_highlighted_choice() {
    let (_temp, mut library) = fixture();
    let mut state = state_for(&library);
    focus(&mut state, &library, 2);
    handle_action(KeyAction::EnterScroll, &mut state, &mut library).unwrap();
    handle_action(KeyAction::TriggerBackup, &mut state, &mut library).unwrap();

    // Default highlight is No: Enter cancels
    let result = handle_action(KeyAction::DialogConfirm, &mut state, &mut library).unwrap();
    assert_eq!(result, ActionResult::Continue);
    assert!(state.dialog.is_none());

    handle_action(KeyAction::TriggerBackup, &mut state, &mut library).unwrap();
    handle_action(KeyAction::DialogToggle, &mut state, &mut library).unwrap();
    let result = handle_action(KeyAction::DialogConfirm, &mut state, &mut library).unwrap();
    assert!(matches!(result, ActionResult::Execute(_)));
}

#[test]
fn test_dialog_does_not_touch_navigation() {
    let (_temp, mut library) = fixture();
    let mut state = state_for(&library);
    focus(&mut state, &library, 2);
    handle_action(KeyAction::EnterScroll, &mut state, &mut library).unwrap();
    state.nav.toggle_selected(3);
    let grid_before = state.nav.grid.full_index();
    let selection_before = state.nav.selection.all().to_vec();

    handle_action(KeyAction::TriggerBackup, &mut state, &mut library).unwrap();
    handle_action(KeyAction::DialogToggle, &mut state, &mut library).unwrap();
    handle_action(KeyAction::DialogCancel, &mut state, &mut library).unwrap();

    assert_eq!(state.nav.grid.full_index(), grid_before);
    assert_eq!(state.nav.selection.all(), &selection_before[..]);
    assert_eq!(state.nav.mode(), Mode::Scroll);
}

#[test]
fn test_execute_backup_creates_snapshot_and_returns_to_browse() {
    let (temp, mut library) = fixture();
    let mut state = state_for(&library);
    focus(&mut state, &library, 0);
    state.nav.enter_scroll(3, 1); // pretend: list already entered

    let engine = FsEngine::with_chunk_size(64);
    let mut reports = 0usize;
    execute_pending(
        PendingAction::Backup { targets: vec![0] },
        &mut state,
        &mut library,
        &engine,
        &mut |_, _, _| reports += 1,
    )
    .unwrap();

    assert!(reports > 0);
    assert_eq!(state.nav.mode(), Mode::Browse);
    assert_eq!(state.message.as_deref(), Some("Backed up 1 title(s)"));
    // Rescan picked the new snapshot up
    assert_eq!(library.backups(0).len(), 1);
    let backup_dir = temp.path().join("backups/alice/metroid");
    assert_eq!(fs::read_dir(backup_dir).unwrap().count(), 1);
}

#[test]
fn test_execute_batch_backup_clears_selection() {
    let (_temp, mut library) = fixture();
    let mut state = state_for(&library);
    state.nav.toggle_selected(3);
    state.nav.grid.set_full_index(1);
    state.nav.toggle_selected(3);

    let engine = FsEngine::new();
    execute_pending(
        PendingAction::Backup { targets: vec![0, 1] },
        &mut state,
        &mut library,
        &engine,
        &mut |_, _, _| {},
    )
    .unwrap();

    assert!(state.nav.selection.is_empty());
    assert_eq!(state.message.as_deref(), Some("Backed up 2 title(s)"));
}

#[test]
fn test_execute_restore_round_trip() {
    let (_temp, mut library) = fixture();
    let mut state = state_for(&library);
    let live = library.title_at(2).unwrap().path.join("game.sav");
    fs::write(&live, b"newer data").unwrap();

    let engine = FsEngine::new();
    execute_pending(
        PendingAction::Restore { title: 2, backup: 0 },
        &mut state,
        &mut library,
        &engine,
        &mut |_, _, _| {},
    )
    .unwrap();

    assert_eq!(fs::read(&live).unwrap(), b"old");
    assert_eq!(state.message.as_deref(), Some("Restored 20250101-120000"));
}

#[test]
fn test_execute_delete_updates_library() {
    let (_temp, mut library) = fixture();
    let mut state = state_for(&library);

    let engine = FsEngine::new();
    execute_pending(
        PendingAction::DeleteBackup { title: 2, backup: 0 },
        &mut state,
        &mut library,
        &engine,
        &mut |_, _, _| {},
    )
    .unwrap();

    assert!(library.backups(2).is_empty());
    assert_eq!(state.message.as_deref(), Some("Deleted backup 20250101-120000"));
}

#[test]
fn test_engine_failure_becomes_message_not_panic() {
    let (_temp, mut library) = fixture();
    let mut state = state_for(&library);

    execute_pending(
        PendingAction::Backup { targets: vec![0] },
        &mut state,
        &mut library,
        &BrokenEngine,
        &mut |_, _, _| {},
    )
    .unwrap();

    assert_eq!(
        state.message.as_deref(),
        Some("Backup failed for metroid: Engine error: disk on fire")
    );
    assert_eq!(state.nav.mode(), Mode::Browse);
}

#[test]
fn test_user_switch_resets_navigation() {
    let (temp, _lib) = fixture();
    // Add a second user so cycling has somewhere to go
    fs::create_dir_all(temp.path().join("saves/bob/tetris")).unwrap();
    let mut library =
        FsLibrary::scan(&temp.path().join("saves"), &temp.path().join("backups")).unwrap();
    let mut state = state_for(&library);
    state.nav.grid.set_full_index(2);
    state.nav.toggle_selected(3);

    handle_action(KeyAction::NextUser, &mut state, &mut library).unwrap();
    assert_eq!(state.nav.grid.full_index(), 0);
    assert!(state.nav.selection.is_empty());
    assert_eq!(state.message.as_deref(), Some("User: bob"));
}
