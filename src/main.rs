//! savepoint - a terminal save-data manager

use std::io::stdout;
use std::process::ExitCode;

use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use savepoint::app::{exit_code, run_app, run_batch_backup, run_list, Config};
use savepoint::provider::FsLibrary;

fn main() -> ExitCode {
    // Parse config first to return INVALID exit code for argument errors
    let config = match Config::from_args() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(exit_code::INVALID as u8);
        }
    };

    // Non-interactive modes
    if config.list_mode {
        return run_list_mode(&config);
    }
    if let Some(title) = config.batch_backup.clone() {
        return run_backup_mode(&config, &title);
    }

    match run_interactive(config) {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(exit_code::ERROR as u8)
        }
    }
}

/// Print the library and exit (non-interactive)
fn run_list_mode(config: &Config) -> ExitCode {
    let result = FsLibrary::scan(&config.saves_root, &config.backup_root)
        .map_err(anyhow::Error::from)
        .and_then(|mut library| run_list(&mut library, config.list_format));
    match result {
        Ok(()) => ExitCode::from(exit_code::SUCCESS as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(exit_code::ERROR as u8)
        }
    }
}

/// Back up one title and exit (non-interactive)
fn run_backup_mode(config: &Config, title: &str) -> ExitCode {
    let result = FsLibrary::scan(&config.saves_root, &config.backup_root)
        .map_err(anyhow::Error::from)
        .and_then(|mut library| run_batch_backup(&mut library, title, config.user.as_deref()));
    match result {
        Ok(()) => ExitCode::from(exit_code::SUCCESS as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(exit_code::ERROR as u8)
        }
    }
}

fn run_interactive(config: Config) -> anyhow::Result<i32> {
    terminal::enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(out);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, config);

    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, cursor::Show)?;

    result.map(|r| r.exit_code)
}
