//! Rendering helpers for the event loop

use ratatui::prelude::*;

use crate::core::AppState;
use crate::provider::FsLibrary;
use crate::render::{
    render_backup_panel, render_dialog, render_grid, render_help_popup, render_status_bar,
    render_top_bar,
};

/// Context for rendering a frame
pub struct RenderContext<'a> {
    pub state: &'a AppState,
    pub library: &'a FsLibrary,
}

/// Render a complete frame
pub fn render_frame(frame: &mut Frame, ctx: RenderContext) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_top_bar(frame, ctx.library, chunks[0]);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
        .split(chunks[1]);

    render_grid(frame, ctx.state, ctx.library, main[0]);
    render_backup_panel(frame, ctx.state, ctx.library, main[1]);

    render_status_bar(frame, ctx.state, chunks[2]);

    if ctx.state.help_visible {
        render_help_popup(frame);
    }
    render_dialog(frame, ctx.state);
}
