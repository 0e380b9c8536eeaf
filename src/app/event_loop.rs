//! Main event loop for the application

use std::io::Stdout;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::prelude::*;

use crate::app::Config;
use crate::core::AppState;
use crate::engine::FsEngine;
use crate::handler::{
    action::{execute_pending, handle_action, ActionResult},
    key::{handle_key_event, KeyAction},
};
use crate::provider::{FsLibrary, TitleProvider};
use crate::render::render_progress_frame;

use super::render::{render_frame, RenderContext};

/// Icon decodes serviced per tick. Bounded so a page of fresh requests never
/// stalls input handling.
const ICON_BUDGET: usize = 3;

/// Result of running the app
pub struct AppResult {
    pub exit_code: i32,
}

/// Main event loop
pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: Config,
) -> anyhow::Result<AppResult> {
    let mut library = FsLibrary::scan(&config.saves_root, &config.backup_root)?;
    let mut state = AppState::new(config.rows, config.cols, config.icons_enabled);
    let engine = FsEngine::new();

    loop {
        // Reconcile cursors with the library before anything reads them
        let title_count = library.title_count();
        let backup_count = library.backups(state.nav.grid.full_index()).len();
        state.nav.sync_focus(title_count, backup_count);

        if state.icons_enabled {
            request_visible_icons(&mut library, &state);
            library.poll_icons(ICON_BUDGET);
        }

        terminal.draw(|frame| {
            render_frame(
                frame,
                RenderContext {
                    state: &state,
                    library: &library,
                },
            )
        })?;

        // 60ms timeout balances responsiveness and CPU usage
        if !event::poll(Duration::from_millis(60))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind == KeyEventKind::Release {
            continue;
        }

        let action = handle_key_event(&state, key);
        if !matches!(action, KeyAction::None) {
            state.clear_message();
        }
        match handle_action(action, &mut state, &mut library)? {
            ActionResult::Continue => {}
            ActionResult::Quit(code) => return Ok(AppResult { exit_code: code }),
            ActionResult::Execute(pending) => {
                // The copy runs to completion on this thread; progress frames
                // show only the gauge popup, so the closure needs no state.
                let mut progress = |done: u64, total: u64, label: &str| {
                    let _ = terminal
                        .draw(|frame| render_progress_frame(frame, done, total, label));
                };
                execute_pending(pending, &mut state, &mut library, &engine, &mut progress)?;
            }
        }
    }
}

/// Request icons for every title on the current page
fn request_visible_icons(library: &mut FsLibrary, state: &AppState) {
    let capacity = state.nav.grid.capacity();
    let first = state.nav.grid.page() * capacity;
    let last = (first + capacity).min(library.title_count());
    for i in first..last {
        library.request_icon(i);
    }
}
