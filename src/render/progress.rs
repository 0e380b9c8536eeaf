//! Copy progress popup

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Gauge};

use crate::format::size_pair;

use super::centered_rect;

/// Draw a whole frame showing only the copy gauge.
///
/// Invoked from the copy engine's progress callback between chunks, so it
/// must not depend on any other app state.
pub fn render_progress_frame(frame: &mut Frame, done: u64, total: u64, label: &str) {
    frame.render_widget(Clear, frame.area());
    let area = centered_rect(50, 5, frame.area());
    let ratio = if total == 0 {
        1.0
    } else {
        (done as f64 / total as f64).min(1.0)
    };
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" copying "))
        .gauge_style(Style::default().fg(Color::Green))
        .label(format!(
            "{}  {}",
            label,
            size_pair(done as f64, total as f64)
        ))
        .ratio(ratio);
    frame.render_widget(gauge, area);
}
