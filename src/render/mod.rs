//! UI rendering: frame chrome, the title grid, the backup panel and popups

mod chrome;
mod dialog;
mod grid;
mod help;
mod icons;
mod panel;
mod progress;

pub use chrome::{render_status_bar, render_top_bar};
pub use dialog::render_dialog;
pub use grid::render_grid;
pub use help::render_help_popup;
pub use icons::icon_lines;
pub use panel::render_backup_panel;
pub use progress::render_progress_frame;

use ratatui::layout::Rect;

/// Centered popup rectangle of the given size, clamped to the frame
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}
