//! Filesystem-backed save library
//!
//! Layout:
//!
//! ```text
//! <saves_root>/<user>/<title>/...          live save data
//! <backup_root>/<user>/<title>/<backup>/   snapshot directories
//! ```
//!
//! Hidden directories are skipped at every level, so a backup root nested
//! inside the saves root (the default `.backups`) never shows up as a user.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use image::DynamicImage;

use super::{AccountProvider, Title, TitleProvider};
use crate::error::{Result, SavepointError};

/// Icon file names probed inside a title directory
const ICON_NAMES: [&str; 3] = ["icon.png", "icon.jpg", "icon.jpeg"];

/// Lazy icon slot. Absent icons stay `Missing` so a failed decode is not
/// retried every frame.
#[derive(Debug, Default)]
enum IconSlot {
    #[default]
    Unloaded,
    Requested,
    Loaded(DynamicImage),
    Missing,
}

#[derive(Debug)]
struct User {
    name: String,
    titles: Vec<Title>,
    icons: Vec<IconSlot>,
}

/// Save library scanned from the local filesystem
#[derive(Debug)]
pub struct FsLibrary {
    saves_root: PathBuf,
    backup_root: PathBuf,
    users: Vec<User>,
    active: usize,
}

impl FsLibrary {
    /// Scan the library. An empty or user-less saves root is not an error;
    /// it produces an empty library the UI degrades around.
    pub fn scan(saves_root: &Path, backup_root: &Path) -> Result<Self> {
        if !saves_root.is_dir() {
            return Err(SavepointError::path(saves_root, "not a directory"));
        }
        let mut library = Self {
            saves_root: saves_root.to_path_buf(),
            backup_root: backup_root.to_path_buf(),
            users: Vec::new(),
            active: 0,
        };
        library.rescan()?;
        Ok(library)
    }

    /// Re-read the directory tree, keeping decoded icons for titles that
    /// survive the rescan. Cursors re-clamp on the next tick.
    pub fn rescan(&mut self) -> Result<()> {
        let mut kept: HashMap<(String, String), IconSlot> = HashMap::new();
        for user in self.users.drain(..) {
            let user_name = user.name;
            for (title, icon) in user.titles.into_iter().zip(user.icons) {
                if matches!(icon, IconSlot::Loaded(_)) {
                    kept.insert((user_name.clone(), title.name), icon);
                }
            }
        }

        for user_dir in sorted_subdirs(&self.saves_root)? {
            let user_name = dir_name(&user_dir);
            let mut titles = Vec::new();
            let mut icons = Vec::new();
            for title_dir in sorted_subdirs(&user_dir)? {
                let name = dir_name(&title_dir);
                let backups = self.scan_backups(&user_name, &name);
                icons.push(
                    kept.remove(&(user_name.clone(), name.clone()))
                        .unwrap_or_default(),
                );
                titles.push(Title {
                    name,
                    path: title_dir,
                    backups,
                });
            }
            self.users.push(User {
                name: user_name,
                titles,
                icons,
            });
        }
        self.active = self.active.min(self.users.len().saturating_sub(1));
        Ok(())
    }

    fn scan_backups(&self, user: &str, title: &str) -> Vec<String> {
        let dir = self.backup_root.join(user).join(title);
        let mut backups: Vec<String> = match sorted_subdirs(&dir) {
            Ok(dirs) => dirs.iter().map(|d| dir_name(d)).collect(),
            Err(_) => Vec::new(),
        };
        backups.sort();
        backups
    }

    fn active_user_ref(&self) -> Option<&User> {
        self.users.get(self.active)
    }

    /// Cycle to the next user. Returns false with a single (or no) user.
    pub fn next_user(&mut self) -> bool {
        if self.users.len() < 2 {
            return false;
        }
        self.active = (self.active + 1) % self.users.len();
        true
    }

    /// Cycle to the previous user
    pub fn prev_user(&mut self) -> bool {
        if self.users.len() < 2 {
            return false;
        }
        self.active = (self.active + self.users.len() - 1) % self.users.len();
        true
    }

    /// Switch to the user with the given name
    pub fn set_user_by_name(&mut self, name: &str) -> bool {
        match self.users.iter().position(|u| u.name == name) {
            Some(id) => {
                self.active = id;
                true
            }
            None => false,
        }
    }

    /// Find a title of the active user by name
    pub fn find_title(&self, name: &str) -> Option<usize> {
        self.active_user_ref()?
            .titles
            .iter()
            .position(|t| t.name == name)
    }

    /// Backup directory for title `i` of the active user
    pub fn backup_dir(&self, i: usize) -> Option<PathBuf> {
        let user = self.active_user_ref()?;
        let title = user.titles.get(i)?;
        Some(self.backup_root.join(&user.name).join(&title.name))
    }

    /// Service up to `budget` pending icon requests, decoding from disk.
    ///
    /// The budget keeps a page full of fresh requests from stalling a tick.
    pub fn poll_icons(&mut self, budget: usize) {
        let Some(user) = self.users.get_mut(self.active) else {
            return;
        };
        let mut remaining = budget;
        for (title, slot) in user.titles.iter().zip(user.icons.iter_mut()) {
            if remaining == 0 {
                break;
            }
            if matches!(slot, IconSlot::Requested) {
                *slot = match load_icon(&title.path) {
                    Some(img) => IconSlot::Loaded(img),
                    None => IconSlot::Missing,
                };
                remaining -= 1;
            }
        }
    }
}

impl TitleProvider for FsLibrary {
    fn title_count(&self) -> usize {
        self.active_user_ref().map_or(0, |u| u.titles.len())
    }

    fn title_at(&self, i: usize) -> Option<&Title> {
        self.active_user_ref()?.titles.get(i)
    }

    fn backups(&self, i: usize) -> &[String] {
        self.title_at(i).map_or(&[], |t| &t.backups)
    }

    fn small_icon(&self, i: usize) -> Option<&DynamicImage> {
        match self.active_user_ref()?.icons.get(i)? {
            IconSlot::Loaded(img) => Some(img),
            _ => None,
        }
    }

    fn request_icon(&mut self, i: usize) {
        if let Some(user) = self.users.get_mut(self.active) {
            if let Some(slot) = user.icons.get_mut(i) {
                if matches!(slot, IconSlot::Unloaded) {
                    *slot = IconSlot::Requested;
                }
            }
        }
    }
}

impl AccountProvider for FsLibrary {
    fn user_count(&self) -> usize {
        self.users.len()
    }

    fn user_name(&self, id: usize) -> Option<&str> {
        self.users.get(id).map(|u| u.name.as_str())
    }

    fn active_user(&self) -> usize {
        self.active
    }
}

/// Non-hidden subdirectories of `dir`, sorted by name
fn sorted_subdirs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(dirs),
        Err(e) => return Err(e.into()),
    };
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        let name = dir_name(&path);
        if path.is_dir() && !name.starts_with('.') {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

fn load_icon(title_dir: &Path) -> Option<DynamicImage> {
    for name in ICON_NAMES {
        let candidate = title_dir.join(name);
        if candidate.is_file() {
            if let Ok(img) = image::open(&candidate) {
                return Some(img);
            }
        }
    }
    None
}
