//! Paged title grid
//!
//! Cell placement goes through [`GridLayout::cell_position`]; a cell whose
//! rectangle does not fit the area is skipped entirely, never clipped.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::AppState;
use crate::nav::GridLayout;
use crate::provider::{FsLibrary, TitleProvider};

use super::icon_lines;

const MARGIN: u16 = 1;

/// Render the current page of the title grid
pub fn render_grid(frame: &mut Frame, state: &AppState, library: &FsLibrary, area: Rect) {
    let title_count = library.title_count();
    if title_count == 0 {
        frame.render_widget(
            Paragraph::new("No titles found").alignment(Alignment::Center),
            area,
        );
        return;
    }

    let rows = state.nav.grid.rows() as u16;
    let cols = state.nav.grid.cols() as u16;
    let layout = GridLayout {
        rows,
        cols,
        cell_w: area.width.saturating_sub(MARGIN * (cols + 1)) / cols.max(1),
        cell_h: area.height.saturating_sub(MARGIN * (rows + 1)) / rows.max(1),
        margin: MARGIN,
        top: 0,
    };
    if layout.cell_w < 4 || layout.cell_h < 3 {
        frame.render_widget(
            Paragraph::new("Terminal too small").alignment(Alignment::Center),
            area,
        );
        return;
    }

    let capacity = state.nav.grid.capacity();
    let first = state.nav.grid.page() * capacity;
    let focused = state.nav.grid.full_index();

    for i in first..(first + capacity).min(title_count) {
        let (x, y) = layout.cell_position(i);
        let cell = Rect {
            x: area.x + x,
            y: area.y + y,
            width: layout.cell_w,
            height: layout.cell_h,
        };
        if cell.right() > area.right() || cell.bottom() > area.bottom() {
            continue;
        }
        render_cell(
            frame,
            library,
            i,
            cell,
            i == focused,
            state.nav.selection.contains(i),
            state.icons_enabled,
        );
    }

    let pages = state.nav.grid.page_count(title_count);
    if pages > 1 {
        let line = Rect {
            x: area.x,
            y: area.bottom().saturating_sub(1),
            width: area.width,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(format!("page {}/{}", state.nav.grid.page() + 1, pages))
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray)),
            line,
        );
    }
}

fn render_cell(
    frame: &mut Frame,
    library: &FsLibrary,
    i: usize,
    cell: Rect,
    focused: bool,
    selected: bool,
    icons_enabled: bool,
) {
    let Some(title) = library.title_at(i) else {
        return;
    };
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let name = if selected {
        format!("\u{2713} {}", title.name)
    } else {
        title.name.clone()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(name);
    let inner = block.inner(cell);
    frame.render_widget(block, cell);

    if icons_enabled {
        if let Some(icon) = library.small_icon(i) {
            frame.render_widget(
                Paragraph::new(icon_lines(icon, inner.width, inner.height)),
                inner,
            );
            return;
        }
    }
    frame.render_widget(
        Paragraph::new(format!("{} backup(s)", library.backups(i).len()))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        inner,
    );
}
