use ratatui::Frame;
use ratatui::layout::{Constraint, Margin, Rect};
use ratatui::widgets::{Block, Borders, Row, Table, TableState};

use crate::engine::DisplayRow;
use crate::ui::theme::Styles;

pub const COLUMNS: [(&str, u16); 6] = [
    ("PID", 8),
    ("USER", 10),
    ("CPU%", 8),
    ("MEM%", 8),
    ("STATUS", 10),
    ("COMMAND", 30),
];

/// Rows taken by the borders, the header and the separator under it.
const CHROME_HEIGHT: u16 = 4;

/// Number of process rows a table region of `table_height` lines can show.
pub fn visible_rows(table_height: u16) -> usize {
    usize::from(table_height.saturating_sub(CHROME_HEIGHT)).max(1)
}

/// Cursor over the derived rows plus the first row currently scrolled into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub selected: usize,
    pub offset: usize,
}

impl Selection {
    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_down(&mut self) {
        self.selected = self.selected.saturating_add(1);
    }

    pub fn page_up(&mut self, n: usize) {
        self.selected = self.selected.saturating_sub(n);
    }

    pub fn page_down(&mut self, n: usize) {
        self.selected = self.selected.saturating_add(n);
    }

    pub fn home(&mut self) {
        self.selected = 0;
    }

    pub fn end(&mut self) {
        self.selected = usize::MAX;
    }

    /// Clamps the cursor to `row_count` rows and scrolls so it stays inside a
    /// window of `visible` rows.
    pub fn resolve(&mut self, row_count: usize, visible: usize) {
        if row_count == 0 {
            *self = Selection::default();
            return;
        }
        let visible = visible.max(1);
        self.selected = self.selected.min(row_count - 1);
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + visible {
            self.offset = self.selected + 1 - visible;
        }
        self.offset = self.offset.min(row_count.saturating_sub(visible));
    }
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    rows: &[DisplayRow],
    selection: Selection,
    styles: &Styles,
) {
    let header = Row::new(COLUMNS.map(|(title, _)| title))
        .style(styles.table_header)
        .bottom_margin(1);
    let body = rows.iter().map(|row| Row::new(row.cells()));

    let table = Table::new(body, COLUMNS.map(|(_, width)| Constraint::Length(width)))
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styles.table_border),
        )
        .row_highlight_style(styles.selected_row);

    let mut state = TableState::default().with_offset(selection.offset);
    if !rows.is_empty() {
        state.select(Some(selection.selected));
    }
    frame.render_stateful_widget(table, area, &mut state);

    // Rule under the header row, drawn over the header's bottom margin.
    let inner = area.inner(Margin::new(1, 1));
    if inner.height >= 2 {
        let header_area = Rect { height: 2, ..inner };
        frame.render_widget(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(styles.table_border),
            header_area,
        );
    }
}
