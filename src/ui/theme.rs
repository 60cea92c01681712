use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSupport {
    Color256,
    Mono,
}

/// `NO_COLOR` (any non-empty value) or `TERM=dumb` turn colors off.
pub fn detect_color_support() -> ColorSupport {
    let no_color = std::env::var("NO_COLOR").unwrap_or_default();
    let term = std::env::var("TERM").unwrap_or_default().to_lowercase();
    color_support_from(&no_color, &term)
}

fn color_support_from(no_color: &str, term: &str) -> ColorSupport {
    if !no_color.is_empty() || term == "dumb" {
        ColorSupport::Mono
    } else {
        ColorSupport::Color256
    }
}

/// Every style the dashboard draws with. Built once at startup and only read
/// afterwards.
#[derive(Debug, Clone)]
pub struct Styles {
    pub title: Style,
    pub system_info: Style,
    pub sort_indicator: Style,
    pub table_border: Style,
    pub table_header: Style,
    pub selected_row: Style,
    pub help: Style,
}

impl Styles {
    pub fn new(support: ColorSupport) -> Self {
        let base = Styles {
            title: Style::default()
                .fg(Color::Indexed(15))
                .bg(Color::Indexed(57))
                .add_modifier(Modifier::BOLD),
            system_info: Style::default()
                .fg(Color::Indexed(10))
                .add_modifier(Modifier::BOLD),
            sort_indicator: Style::default(),
            table_border: Style::default().fg(Color::Indexed(240)),
            table_header: Style::default().fg(Color::Indexed(252)),
            selected_row: Style::default()
                .fg(Color::Indexed(229))
                .bg(Color::Indexed(57)),
            help: Style::default().add_modifier(Modifier::DIM),
        };
        match support {
            ColorSupport::Color256 => base,
            ColorSupport::Mono => base.without_colors(),
        }
    }

    fn without_colors(self) -> Self {
        let strip = |style: Style| Style {
            fg: None,
            bg: None,
            ..style
        };
        Styles {
            title: strip(self.title).add_modifier(Modifier::REVERSED),
            system_info: strip(self.system_info),
            sort_indicator: strip(self.sort_indicator),
            table_border: strip(self.table_border),
            table_header: strip(self.table_header).add_modifier(Modifier::BOLD),
            selected_row: strip(self.selected_row).add_modifier(Modifier::REVERSED),
            help: strip(self.help),
        }
    }
}

impl Default for Styles {
    fn default() -> Self {
        Styles::new(ColorSupport::Color256)
    }
}
