use std::time::Duration;

/// Hard cap on the number of process rows ever derived.
pub const MAX_ROWS: usize = 50;
/// Process names longer than this are cut and get [`NAME_ELLIPSIS`] appended.
pub const NAME_WIDTH: usize = 28;
pub const NAME_ELLIPSIS: &str = "..";
/// User names are cut to this many characters when a sample is ingested.
pub const USER_WIDTH: usize = 8;

/// Runtime settings. There is no config file; these are the built-in values.
#[derive(Debug, Clone)]
pub struct Settings {
    pub refresh_rate_ms: u64,
    pub header_core_limit: usize,
    pub table_margin_width: u16,
    pub table_margin_height: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            refresh_rate_ms: 2000,
            header_core_limit: 8,
            table_margin_width: 4,
            table_margin_height: 12,
        }
    }
}

impl Settings {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_rate_ms)
    }
}
