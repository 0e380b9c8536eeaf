//! Top bar and bottom status bar

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::core::{AppState, Mode};
use crate::format::clock_string;
use crate::provider::{AccountProvider, FsLibrary};

/// App name, version, user strip and wall clock
pub fn render_top_bar(frame: &mut Frame, library: &FsLibrary, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(" savepoint v{} ", env!("CARGO_PKG_VERSION")),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    for id in 0..library.user_count() {
        let name = library.user_name(id).unwrap_or("-");
        if id == library.active_user() {
            spans.push(Span::styled(
                format!("[{}]", name),
                Style::default().fg(Color::Yellow),
            ));
        } else {
            spans.push(Span::styled(
                format!(" {} ", name),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
    frame.render_widget(
        Paragraph::new(format!("{} ", clock_string())).alignment(Alignment::Right),
        area,
    );
}

/// Status message when one is set, otherwise mode-dependent key hints
pub fn render_status_bar(frame: &mut Frame, state: &AppState, area: Rect) {
    let (text, style) = match state.message {
        Some(ref msg) => (msg.clone(), Style::default().fg(Color::Yellow)),
        None => {
            let hints = match state.nav.mode() {
                Mode::Browse => {
                    "arrows move | Space mark | a all | Enter backups | [ ] user | R rescan | ? help | q quit"
                }
                Mode::Scroll => "arrows scroll | s backup | r restore | d delete | Esc back",
            };
            (hints.to_string(), Style::default().fg(Color::DarkGray))
        }
    };
    frame.render_widget(Paragraph::new(format!(" {}", text)).style(style), area);
}
