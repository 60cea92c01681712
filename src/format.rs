use std::time::Duration;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::config::{NAME_ELLIPSIS, NAME_WIDTH};

/// Fits `s` into `max_width` terminal columns, ending in `…` when cut.
pub fn truncate_unicode(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width.saturating_sub(1) {
            result.push('\u{2026}');
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result
}

/// Keeps the first `max_chars` characters of `s`.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}

pub fn truncate_name(name: &str) -> String {
    if name.chars().count() <= NAME_WIDTH {
        return name.to_string();
    }
    let mut out = truncate_chars(name, NAME_WIDTH);
    out.push_str(NAME_ELLIPSIS);
    out
}

pub fn format_percent(value: f32) -> String {
    format!("{value:.1}")
}

/// `3d 4h 5m`, `4h 5m` or `5m`.
pub fn format_duration(d: Duration) -> String {
    let total_minutes = d.as_secs() / 60;
    let days = total_minutes / (24 * 60);
    let hours = (total_minutes / 60) % 24;
    let minutes = total_minutes % 60;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

pub fn format_gib(bytes: u64) -> String {
    const GIB: f64 = 1024.0 * 1024.0 * 1024.0;
    format!("{:.1}G", bytes as f64 / GIB)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_shapes() {
        assert_eq!(format_duration(Duration::from_secs(59)), "0m");
        assert_eq!(format_duration(Duration::from_secs(5 * 60)), "5m");
        assert_eq!(format_duration(Duration::from_secs(4 * 3600 + 5 * 60)), "4h 5m");
        assert_eq!(
            format_duration(Duration::from_secs(3 * 86400 + 4 * 3600 + 5 * 60 + 30)),
            "3d 4h 5m"
        );
        assert_eq!(format_duration(Duration::from_secs(86400)), "1d 0h 0m");
    }

    #[test]
    fn name_truncation_keeps_28_chars_plus_marker() {
        let short = "a".repeat(28);
        assert_eq!(truncate_name(&short), short);

        let long = format!("{}XYZ", "b".repeat(28));
        assert_eq!(truncate_name(&long), format!("{}..", "b".repeat(28)));
    }

    #[test]
    fn name_truncation_counts_chars_not_bytes() {
        let name = "é".repeat(30);
        let out = truncate_name(&name);
        assert_eq!(out.chars().count(), 30);
        assert!(out.starts_with(&"é".repeat(28)));
        assert!(out.ends_with(".."));
    }

    #[test]
    fn truncate_chars_handles_short_input() {
        assert_eq!(truncate_chars("root", 8), "root");
        assert_eq!(truncate_chars("", 8), "");
        assert_eq!(truncate_chars("messagebus", 8), "messageb");
    }

    #[test]
    fn percent_has_one_decimal() {
        assert_eq!(format_percent(0.0), "0.0");
        assert_eq!(format_percent(12.345), "12.3");
        assert_eq!(format_percent(99.96), "100.0");
    }

    #[test]
    fn gib_formatting() {
        assert_eq!(format_gib(0), "0.0G");
        assert_eq!(format_gib(8 * 1024 * 1024 * 1024), "8.0G");
        assert_eq!(format_gib(1536 * 1024 * 1024), "1.5G");
    }

    #[test]
    fn unicode_truncation_adds_ellipsis() {
        assert_eq!(truncate_unicode("controls", 20), "controls");
        assert_eq!(truncate_unicode("controls", 5), "cont\u{2026}");
    }
}
