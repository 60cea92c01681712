use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::format::truncate_unicode;
use crate::ui::theme::Styles;

pub const CONTROLS: &str =
    "Controls: [c] CPU sort \u{2022} [m] Memory sort \u{2022} [p] PID sort \u{2022} [n] Name sort \u{2022} [q] Quit";

pub fn render(frame: &mut Frame, area: Rect, styles: &Styles) {
    let text = truncate_unicode(CONTROLS, area.width as usize);
    frame.render_widget(Paragraph::new(Line::from(Span::styled(text, styles.help))), area);
}
