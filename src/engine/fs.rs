//! Filesystem copy engine
//!
//! Recursive directory copy with chunked reads so progress can be reported
//! between chunks. The byte total is precomputed by walking the source tree.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use super::{BackupEngine, ProgressFn};
use crate::error::{Result, SavepointError};
use crate::provider::Title;

/// Default copy chunk size (1 MiB)
const CHUNK_SIZE: usize = 1024 * 1024;

/// Copy engine backed by std::fs
#[derive(Debug, Clone)]
pub struct FsEngine {
    chunk_size: usize,
}

impl Default for FsEngine {
    fn default() -> Self {
        Self {
            chunk_size: CHUNK_SIZE,
        }
    }
}

impl FsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chunk size override, mainly for tests
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
        }
    }

    fn copy_tree(&self, src: &Path, dest: &Path, progress: &mut ProgressFn) -> Result<u64> {
        if !src.is_dir() {
            return Err(SavepointError::path(src, "source is not a directory"));
        }
        let total = dir_size(src)?;
        let mut done = 0u64;
        self.copy_dir(src, dest, total, &mut done, progress)?;
        Ok(done)
    }

    fn copy_dir(
        &self,
        src: &Path,
        dest: &Path,
        total: u64,
        done: &mut u64,
        progress: &mut ProgressFn,
    ) -> Result<()> {
        fs::create_dir_all(dest)?;
        for entry in fs::read_dir(src)? {
            let entry = entry?;
            let src_path = entry.path();
            let dest_path = dest.join(entry.file_name());
            if src_path.is_dir() {
                self.copy_dir(&src_path, &dest_path, total, done, progress)?;
            } else {
                self.copy_file(&src_path, &dest_path, total, done, progress)?;
            }
        }
        Ok(())
    }

    fn copy_file(
        &self,
        src: &Path,
        dest: &Path,
        total: u64,
        done: &mut u64,
        progress: &mut ProgressFn,
    ) -> Result<()> {
        let label = src
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let mut reader = File::open(src)?;
        let mut writer = File::create(dest)?;
        let mut buf = vec![0u8; self.chunk_size];
        loop {
            let n = reader.read(&mut buf)?;
            if n == 0 {
                break;
            }
            writer.write_all(&buf[..n])?;
            *done += n as u64;
            progress(*done, total, &label);
        }
        Ok(())
    }
}

impl BackupEngine for FsEngine {
    fn backup(&self, title: &Title, dest: &Path, progress: &mut ProgressFn) -> Result<u64> {
        if dest.exists() {
            return Err(SavepointError::engine(format!(
                "backup target already exists: {}",
                dest.display()
            )));
        }
        self.copy_tree(&title.path, dest, progress)
    }

    fn restore(&self, backup: &Path, title: &Title, progress: &mut ProgressFn) -> Result<u64> {
        if !backup.is_dir() {
            return Err(SavepointError::path(backup, "backup not found"));
        }
        // Clear the live save dir so deleted files do not survive the restore
        if title.path.exists() {
            fs::remove_dir_all(&title.path)?;
        }
        self.copy_tree(backup, &title.path, progress)
    }

    fn delete_backup(&self, backup: &Path) -> Result<()> {
        if !backup.is_dir() {
            return Err(SavepointError::path(backup, "backup not found"));
        }
        fs::remove_dir_all(backup)?;
        Ok(())
    }
}

/// Total size in bytes of all files under `dir`
fn dir_size(dir: &Path) -> Result<u64> {
    let mut total = 0u64;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            total += dir_size(&path)?;
        } else {
            total += entry.metadata()?.len();
        }
    }
    Ok(total)
}
