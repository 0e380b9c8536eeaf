//! Confirmation dialog popup

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::core::{AppState, DialogChoice};

use super::centered_rect;

/// Modal yes/no popup for the pending operation, if one is armed
pub fn render_dialog(frame: &mut Frame, state: &AppState) {
    let Some(dialog) = state.dialog.as_ref() else {
        return;
    };
    let width = (dialog.prompt.len() as u16 + 6).max(30).min(frame.area().width);
    let area = centered_rect(width, 7, frame.area());
    frame.render_widget(Clear, area);

    let text = vec![
        Line::raw(""),
        Line::from(dialog.prompt.as_str()).alignment(Alignment::Center),
        Line::raw(""),
        Line::from(vec![
            button("Yes", dialog.choice == DialogChoice::Yes),
            Span::raw("      "),
            button("No", dialog.choice == DialogChoice::No),
        ])
        .alignment(Alignment::Center),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" confirm ");
    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn button(label: &str, active: bool) -> Span<'static> {
    let style = if active {
        Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        Style::default()
    };
    Span::styled(format!("[ {} ]", label), style)
}
