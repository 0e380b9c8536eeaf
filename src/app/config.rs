//! Application configuration from CLI arguments

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use super::config_file::ConfigFile;
use crate::app::exit_code;

/// Output format for `--list`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListFormat {
    #[default]
    Lines,
    Json,
}

impl FromStr for ListFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lines" => Ok(ListFormat::Lines),
            "json" => Ok(ListFormat::Json),
            _ => Err(()),
        }
    }
}

/// Application configuration from CLI args and config file
pub struct Config {
    /// Save library root
    pub saves_root: PathBuf,
    /// Backup snapshot root
    pub backup_root: PathBuf,
    /// Grid rows per page
    pub rows: usize,
    /// Grid columns per page
    pub cols: usize,
    /// Draw decoded title icons
    pub icons_enabled: bool,
    /// Print the library and exit (non-interactive)
    pub list_mode: bool,
    /// Output format for list mode
    pub list_format: ListFormat,
    /// Back up one title and exit (non-interactive)
    pub batch_backup: Option<String>,
    /// User to operate on in batch mode
    pub user: Option<String>,
}

impl Config {
    pub fn from_args() -> anyhow::Result<Self> {
        // Load config file first (provides defaults)
        let config_file = ConfigFile::load();

        let mut args = env::args().skip(1);
        let mut saves_root: Option<PathBuf> = None;
        let mut backup_root: Option<PathBuf> = None;
        let mut rows: Option<usize> = None;
        let mut cols: Option<usize> = None;
        let mut icons: Option<bool> = None;
        let mut list_mode = false;
        let mut list_format = ListFormat::default();
        let mut batch_backup: Option<String> = None;
        let mut user: Option<String> = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--list" | "-l" => list_mode = true,
                "--format" | "-f" => {
                    if let Some(fmt) = args.next() {
                        list_format = ListFormat::from_str(&fmt).map_err(|_| {
                            anyhow::anyhow!("Invalid format '{}'. Valid formats: lines, json", fmt)
                        })?;
                    } else {
                        anyhow::bail!("--format requires a value (lines or json)");
                    }
                }
                "--backup" | "-b" => {
                    if let Some(title) = args.next() {
                        batch_backup = Some(title);
                    } else {
                        anyhow::bail!("--backup requires a title name");
                    }
                }
                "--user" | "-u" => {
                    if let Some(name) = args.next() {
                        user = Some(name);
                    } else {
                        anyhow::bail!("--user requires a user name");
                    }
                }
                "--backup-root" => {
                    if let Some(path) = args.next() {
                        backup_root = Some(PathBuf::from(path));
                    } else {
                        anyhow::bail!("--backup-root requires a directory path");
                    }
                }
                "--rows" => rows = Some(parse_dimension(&arg, args.next())?),
                "--cols" => cols = Some(parse_dimension(&arg, args.next())?),
                "--icons" | "-i" => icons = Some(true),
                "--no-icons" => icons = Some(false),
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(exit_code::SUCCESS);
                }
                "--version" | "-V" => {
                    println!("svp {}", env!("CARGO_PKG_VERSION"));
                    std::process::exit(exit_code::SUCCESS);
                }
                path if !path.starts_with('-') => {
                    saves_root = Some(PathBuf::from(path));
                }
                unknown => {
                    anyhow::bail!(
                        "Unknown option: {}. Use --help for usage information.",
                        unknown
                    );
                }
            }
        }

        let saves_root = match saves_root.or(config_file.paths.saves_root) {
            Some(root) => root,
            None => env::current_dir()?,
        };
        if !saves_root.is_dir() {
            anyhow::bail!("Save root does not exist: {}", saves_root.display());
        }
        let saves_root = saves_root.canonicalize()?;
        let backup_root = backup_root
            .or(config_file.paths.backup_root)
            .unwrap_or_else(|| saves_root.join(".backups"));

        // CLI arguments take precedence over config file
        let icons_enabled = match icons {
            Some(v) => v,
            None => env::var("SAVEPOINT_ICONS")
                .map(|v| v != "0" && v.to_lowercase() != "false")
                .unwrap_or(config_file.general.icons),
        };

        Ok(Self {
            saves_root,
            backup_root,
            rows: rows.unwrap_or(config_file.general.rows).max(1),
            cols: cols.unwrap_or(config_file.general.cols).max(1),
            icons_enabled,
            list_mode,
            list_format,
            batch_backup,
            user,
        })
    }
}

fn parse_dimension(flag: &str, value: Option<String>) -> anyhow::Result<usize> {
    let Some(value) = value else {
        anyhow::bail!("{} requires a positive integer", flag);
    };
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => anyhow::bail!("{} requires a positive integer, got '{}'", flag, value),
    }
}

fn print_help() {
    println!(
        r#"svp - savepoint: a terminal save-data manager

USAGE:
    svp [OPTIONS] [SAVES_ROOT]

The saves root holds one directory per user, each holding one directory per
title. Backups are snapshot directories under the backup root, mirroring the
same user/title layout.

OPTIONS:
    -l, --list          Print users, titles and backups, then exit
    -f, --format FMT    Output format for --list: lines, json
    -b, --backup TITLE  Back up one title without the UI, then exit
    -u, --user NAME     User to operate on (default: first user)
    --backup-root DIR   Backup location (default: <saves_root>/.backups)
    --rows N            Grid rows per page (default: 5)
    --cols N            Grid columns per page (default: 6)
    -i, --icons         Enable title icons (default)
    --no-icons          Disable title icons
    -h, --help          Show this help message
    -V, --version       Show version

CONFIG FILE:
    ~/.config/savepoint/config.toml

    [general]           rows, cols, icons
    [paths]             saves_root, backup_root

ENVIRONMENT:
    SAVEPOINT_ICONS=0   Disable icons

KEYBINDINGS:
    h/j/k/l, arrows     Move cursor (grid or backup list)
    Enter               Open the focused title's backup list
    Esc, b              Back to the grid / clear marks
    Space               Mark the focused title
    a                   Mark all titles (again to clear)
    s                   Back up marked titles (or the focused one)
    r                   Restore the highlighted backup
    d/Del               Delete the highlighted backup
    [ / ]               Previous / next user
    R/F5                Rescan the library
    ?                   Show help
    q                   Quit

EXIT CODES:
    0                   Success
    1                   Error (runtime error)
    3                   Invalid arguments (unknown option or invalid value)
"#
    );
}
