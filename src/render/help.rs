//! Help popup

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::centered_rect;

const KEYS: &[(&str, &str)] = &[
    ("arrows / hjkl", "move"),
    ("Enter", "open backup list"),
    ("Esc / b", "back to grid"),
    ("Space", "mark title"),
    ("a", "mark all / clear"),
    ("s", "back up marked or focused"),
    ("r", "restore highlighted backup"),
    ("d / Del", "delete highlighted backup"),
    ("[ / ]", "previous / next user"),
    ("R / F5", "rescan library"),
    ("?", "this help"),
    ("q", "quit"),
];

pub fn render_help_popup(frame: &mut Frame) {
    let area = centered_rect(46, KEYS.len() as u16 + 2, frame.area());
    frame.render_widget(Clear, area);
    let lines: Vec<Line> = KEYS
        .iter()
        .map(|(key, what)| {
            Line::from(vec![
                Span::styled(format!(" {:<16}", key), Style::default().fg(Color::Yellow)),
                Span::raw(*what),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" keys ")),
        area,
    );
}
