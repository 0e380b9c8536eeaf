//! Backup, restore and delete: dialog arming and confirmed execution

use crate::core::{AppState, Dialog, PendingAction};
use crate::engine::BackupEngine;
use crate::error::Result;
use crate::format::timestamp_name;
use crate::provider::{FsLibrary, TitleProvider};

fn title_name(library: &FsLibrary, i: usize) -> String {
    library
        .title_at(i)
        .map(|t| t.name.clone())
        .unwrap_or_else(|| format!("#{}", i))
}

/// Arm the backup confirmation dialog.
///
/// Targets are the marked titles in the order they were marked, falling back
/// to the focused title when nothing is marked.
pub fn request_backup(state: &mut AppState, library: &FsLibrary) {
    if !state.nav.armed() {
        state.set_message("Enter a title before backing up");
        return;
    }
    let targets: Vec<usize> = if state.nav.selection.is_empty() {
        vec![state.nav.grid.full_index()]
    } else {
        state.nav.selection.all().to_vec()
    };
    let prompt = if targets.len() == 1 {
        format!("Backup {}?", title_name(library, targets[0]))
    } else {
        format!("Backup {} titles?", targets.len())
    };
    state.dialog = Some(Dialog::new(PendingAction::Backup { targets }, prompt));
}

/// Arm the restore confirmation dialog for the highlighted backup
pub fn request_restore(state: &mut AppState, library: &FsLibrary) {
    if !state.nav.armed() {
        state.set_message("Enter a title before restoring");
        return;
    }
    if !state.nav.selection.is_empty() {
        state.set_message("Restore works on one title at a time");
        return;
    }
    let title = state.nav.grid.full_index();
    let backup = state.nav.list.index();
    let Some(name) = library.backups(title).get(backup).cloned() else {
        state.set_message("No backup to restore");
        return;
    };
    state.dialog = Some(Dialog::new(
        PendingAction::Restore { title, backup },
        format!("Restore {} over {}?", name, title_name(library, title)),
    ));
}

/// Arm the delete confirmation dialog for the highlighted backup
pub fn request_delete(state: &mut AppState, library: &FsLibrary) {
    if !state.nav.armed() {
        state.set_message("Enter a title before deleting a backup");
        return;
    }
    let title = state.nav.grid.full_index();
    let backup = state.nav.list.index();
    let Some(name) = library.backups(title).get(backup).cloned() else {
        state.set_message("No backup to delete");
        return;
    };
    state.dialog = Some(Dialog::new(
        PendingAction::DeleteBackup { title, backup },
        format!("Delete backup {}?", name),
    ));
}

/// Run a confirmed operation against the copy engine.
///
/// Engine failures land in the status message, never panic, and the UI
/// returns to Browse mode either way. `progress` is invoked once per copied
/// chunk; the interactive caller draws a progress frame from it.
pub fn execute_pending(
    action: PendingAction,
    state: &mut AppState,
    library: &mut FsLibrary,
    engine: &dyn BackupEngine,
    progress: &mut dyn FnMut(u64, u64, &str),
) -> Result<()> {
    match action {
        PendingAction::Backup { targets } => {
            let stamp = timestamp_name();
            let mut done = 0usize;
            let mut failure: Option<String> = None;
            for &idx in &targets {
                let Some(title) = library.title_at(idx).cloned() else {
                    continue;
                };
                let Some(dest) = library.backup_dir(idx) else {
                    continue;
                };
                match engine.backup(&title, &dest.join(&stamp), progress) {
                    Ok(_) => done += 1,
                    Err(e) => {
                        failure = Some(format!("Backup failed for {}: {}", title.name, e));
                    }
                }
            }
            match failure {
                Some(msg) => state.set_message(msg),
                None => state.set_message(format!("Backed up {} title(s)", done)),
            }
            state.nav.selection.clear();
            library.rescan()?;
        }

        PendingAction::Restore { title, backup } => {
            let name = library.backups(title).get(backup).cloned();
            let target = library.title_at(title).cloned();
            let dir = library.backup_dir(title);
            match (name, target, dir) {
                (Some(name), Some(target), Some(dir)) => {
                    match engine.restore(&dir.join(&name), &target, progress) {
                        Ok(_) => state.set_message(format!("Restored {}", name)),
                        Err(e) => state.set_message(format!("Restore failed: {}", e)),
                    }
                }
                _ => state.set_message("Backup vanished before restore"),
            }
        }

        PendingAction::DeleteBackup { title, backup } => {
            let name = library.backups(title).get(backup).cloned();
            let dir = library.backup_dir(title);
            match (name, dir) {
                (Some(name), Some(dir)) => match engine.delete_backup(&dir.join(&name)) {
                    Ok(()) => state.set_message(format!("Deleted backup {}", name)),
                    Err(e) => state.set_message(format!("Delete failed: {}", e)),
                },
                _ => state.set_message("Backup vanished before delete"),
            }
            library.rescan()?;
        }
    }

    // Copy operations end back in the grid regardless of outcome
    state.nav.leave_scroll();
    Ok(())
}
