pub mod header;
pub mod statusbar;
pub mod table;
pub mod theme;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::engine::DisplayRow;
use crate::ui::header::HeaderLines;
use crate::ui::table::Selection;
use crate::ui::theme::Styles;

/// Everything one redraw needs. Borrowed from the app for the duration of a frame.
#[derive(Debug)]
pub struct RenderRequest<'a> {
    pub header: HeaderLines,
    pub rows: &'a [DisplayRow],
    pub selection: Selection,
    pub table_width: u16,
    pub table_height: u16,
}

pub fn draw(frame: &mut Frame, request: &RenderRequest<'_>, styles: &Styles) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(request.header.height()),
            Constraint::Length(1),
            Constraint::Length(request.table_height),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(frame.area());

    header::render(frame, chunks[0], &request.header, styles);

    let table_area = Rect {
        width: request.table_width.min(chunks[2].width),
        ..chunks[2]
    };
    table::render(frame, table_area, request.rows, request.selection, styles);

    statusbar::render(frame, chunks[4], styles);
}
