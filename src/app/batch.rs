//! Batch backup for `--backup <title>` (non-interactive)

use crate::engine::{BackupEngine, FsEngine};
use crate::format::{size_string, timestamp_name};
use crate::provider::{FsLibrary, TitleProvider};

/// Back up one title of one user, printing progress percentages to stdout
pub fn run_batch_backup(
    library: &mut FsLibrary,
    title_name: &str,
    user: Option<&str>,
) -> anyhow::Result<()> {
    if let Some(user) = user {
        if !library.set_user_by_name(user) {
            anyhow::bail!("Unknown user: {}", user);
        }
    }
    let Some(idx) = library.find_title(title_name) else {
        anyhow::bail!("Unknown title: {}", title_name);
    };
    let title = library
        .title_at(idx)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("Unknown title: {}", title_name))?;
    let dest_dir = library
        .backup_dir(idx)
        .ok_or_else(|| anyhow::anyhow!("No backup location for: {}", title_name))?;
    let dest = dest_dir.join(timestamp_name());

    let engine = FsEngine::new();
    let mut last_pct = u64::MAX;
    let copied = engine.backup(&title, &dest, &mut |done, total, label| {
        let pct = if total == 0 { 100 } else { done * 100 / total };
        if pct != last_pct {
            println!("{:>3}% {}", pct, label);
            last_pct = pct;
        }
    })?;

    println!(
        "Backed up {} ({}) to {}",
        title.name,
        size_string(copied as f64),
        dest.display()
    );
    Ok(())
}
