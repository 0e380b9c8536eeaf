//! Backup panel for the focused title

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::core::AppState;
use crate::provider::{FsLibrary, TitleProvider};

/// Backup list plus the operation buttons, disarmed while browsing the grid
pub fn render_backup_panel(frame: &mut Frame, state: &AppState, library: &FsLibrary, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    let focused = state.nav.grid.full_index();
    let title_name = library
        .title_at(focused)
        .map(|t| t.name.as_str())
        .unwrap_or("-");
    let armed = state.nav.armed();

    let border_style = if armed {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ", title_name));

    let backups = library.backups(focused);
    if backups.is_empty() {
        frame.render_widget(
            Paragraph::new("no backups")
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            chunks[0],
        );
    } else {
        let items: Vec<ListItem> = backups.iter().map(|b| ListItem::new(b.as_str())).collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut list_state = ListState::default();
        if armed {
            list_state.select(Some(state.nav.list.index()));
        }
        frame.render_stateful_widget(list, chunks[0], &mut list_state);
    }

    let button_style = if armed {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(
        Paragraph::new("Backup [s]   Restore [r]   Delete [d]")
            .style(button_style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border_style)),
        chunks[1],
    );
}
