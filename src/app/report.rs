//! Library listing for `--list` (non-interactive)

use super::config::ListFormat;
use crate::provider::{AccountProvider, FsLibrary, TitleProvider};

/// Print every user, title and backup of the library and return
pub fn run_list(library: &mut FsLibrary, format: ListFormat) -> anyhow::Result<()> {
    match format {
        ListFormat::Lines => print_lines(library),
        ListFormat::Json => print_json(library),
    }
}

fn user_names(library: &FsLibrary) -> Vec<String> {
    (0..library.user_count())
        .filter_map(|id| library.user_name(id).map(str::to_string))
        .collect()
}

fn print_lines(library: &mut FsLibrary) -> anyhow::Result<()> {
    for name in user_names(library) {
        library.set_user_by_name(&name);
        println!("{}", name);
        for i in 0..library.title_count() {
            if let Some(title) = library.title_at(i) {
                println!("  {}", title.name);
            }
            for backup in library.backups(i) {
                println!("    {}", backup);
            }
        }
    }
    Ok(())
}

fn print_json(library: &mut FsLibrary) -> anyhow::Result<()> {
    let mut users = Vec::new();
    for name in user_names(library) {
        library.set_user_by_name(&name);
        let titles: Vec<serde_json::Value> = (0..library.title_count())
            .filter_map(|i| {
                library.title_at(i).map(|title| {
                    serde_json::json!({
                        "name": title.name,
                        "backups": title.backups,
                    })
                })
            })
            .collect();
        users.push(serde_json::json!({ "name": name, "titles": titles }));
    }
    let doc = serde_json::json!({ "users": users });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
