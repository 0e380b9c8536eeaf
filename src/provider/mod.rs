//! Save library: title and account providers
//!
//! The navigation controller only sees these contracts; the filesystem
//! implementation lives in [`fs`].

mod fs;

pub use fs::FsLibrary;

use std::path::PathBuf;

use image::DynamicImage;

/// One title: a directory of live save data plus its known backups
#[derive(Debug, Clone)]
pub struct Title {
    /// Display name (the directory name)
    pub name: String,
    /// Live save data directory
    pub path: PathBuf,
    /// Backup names, sorted ascending (timestamps sort naturally)
    pub backups: Vec<String>,
}

/// Titles of the active user, indexed the way the grid sees them
pub trait TitleProvider {
    fn title_count(&self) -> usize;

    fn title_at(&self, i: usize) -> Option<&Title>;

    /// Backups of title `i`; empty slice when out of range
    fn backups(&self, i: usize) -> &[String];

    /// Decoded icon of title `i`, if it has finished loading
    fn small_icon(&self, i: usize) -> Option<&DynamicImage>;

    /// Record a one-shot load request for title `i`'s icon.
    ///
    /// Loading happens later on the library's own budget; this never blocks.
    fn request_icon(&mut self, i: usize);
}

/// Enumerates users and tracks which one the grid is showing
pub trait AccountProvider {
    fn user_count(&self) -> usize;

    fn user_name(&self, id: usize) -> Option<&str>;

    fn active_user(&self) -> usize;
}
