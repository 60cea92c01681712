use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::engine::SortDirective;
use crate::format::{format_duration, format_gib};
use crate::system::snapshot::Snapshot;
use crate::ui::theme::Styles;

pub const TITLE: &str = "proctop - System Monitor";

/// Summary lines shown above the process table. A `None` field is not drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderLines {
    pub title: String,
    pub uptime: Option<String>,
    pub load: Option<String>,
    pub cores: String,
    pub cpu: Option<String>,
    pub memory: Option<String>,
    pub sort: String,
}

impl HeaderLines {
    /// `cpu_count` is the host's logical CPU count, known before the first sample.
    pub fn build(
        snapshot: &Snapshot,
        directive: &SortDirective,
        cpu_count: usize,
        core_limit: usize,
    ) -> Self {
        HeaderLines {
            title: TITLE.to_string(),
            uptime: snapshot
                .uptime
                .filter(|d| !d.is_zero())
                .map(|d| format!("Uptime: {}", format_duration(d))),
            load: snapshot.load_average.map(|load| {
                format!(
                    "Load: {:.2} {:.2} {:.2}",
                    load.one, load.five, load.fifteen
                )
            }),
            cores: format!("CPUs: {cpu_count}"),
            cpu: cpu_line(&snapshot.cpu_usage_per_core, core_limit),
            memory: snapshot.memory.map(|mem| {
                format!(
                    "Memory: {}/{} ({:.1}%)",
                    format_gib(mem.used_bytes),
                    format_gib(mem.total_bytes),
                    mem.used_percent
                )
            }),
            sort: format!(
                "Sorted by: {} ({})",
                directive.criterion.label(),
                directive.direction_label()
            ),
        }
    }

    /// Number of terminal rows [`render`] needs for these lines.
    pub fn height(&self) -> u16 {
        self.to_lines(&Styles::default()).len() as u16
    }

    pub fn to_lines(&self, styles: &Styles) -> Vec<Line<'_>> {
        let mut lines = vec![
            Line::from(Span::styled(format!(" {} ", self.title), styles.title)),
            Line::default(),
        ];

        let mut info = Vec::new();
        for part in [self.uptime.as_deref(), self.load.as_deref()]
            .into_iter()
            .flatten()
        {
            info.push(Span::styled(part, styles.system_info));
            info.push(Span::raw("  "));
        }
        info.push(Span::styled(self.cores.as_str(), styles.system_info));
        lines.push(Line::from(info));

        if let Some(cpu) = &self.cpu {
            lines.push(Line::from(Span::styled(cpu.as_str(), styles.system_info)));
        }
        if let Some(memory) = &self.memory {
            lines.push(Line::from(Span::styled(memory.as_str(), styles.system_info)));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            self.sort.as_str(),
            styles.sort_indicator,
        )));
        lines
    }
}

fn cpu_line(per_core: &[f32], core_limit: usize) -> Option<String> {
    if per_core.is_empty() {
        return None;
    }
    let shown: Vec<String> = per_core
        .iter()
        .take(core_limit)
        .map(|usage| format!("{usage:.1}%"))
        .collect();
    let mut line = format!("CPU: {}", shown.join(" "));
    if per_core.len() > core_limit {
        line.push_str(&format!(" (+{} more)", per_core.len() - core_limit));
    }
    Some(line)
}

pub fn render(frame: &mut Frame, area: Rect, header: &HeaderLines, styles: &Styles) {
    frame.render_widget(Paragraph::new(header.to_lines(styles)), area);
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use insta::assert_snapshot;

    use super::*;
    use crate::engine::SortCriterion;
    use crate::system::snapshot::{LoadAverage, MemoryUsage};

    const GIB: u64 = 1024 * 1024 * 1024;

    fn full_snapshot() -> Snapshot {
        Snapshot {
            uptime: Some(Duration::from_secs(2 * 86400 + 3 * 3600 + 17 * 60)),
            load_average: Some(LoadAverage {
                one: 0.5,
                five: 1.25,
                fifteen: 2.0,
            }),
            cpu_usage_per_core: vec![12.0, 3.5],
            memory: MemoryUsage::from_bytes(4 * GIB, 16 * GIB),
            processes: Vec::new(),
        }
    }

    fn plain_text(header: &HeaderLines) -> String {
        header
            .to_lines(&Styles::default())
            .iter()
            .map(|line| line.to_string().trim().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn header_with_every_metric() {
        let header = HeaderLines::build(&full_snapshot(), &SortDirective::default(), 2, 8);
        assert_snapshot!(plain_text(&header), @r"
        proctop - System Monitor

        Uptime: 2d 3h 17m  Load: 0.50 1.25 2.00  CPUs: 2
        CPU: 12.0% 3.5%
        Memory: 4.0G/16.0G (25.0%)

        Sorted by: cpu (descending)
        ");
    }

    #[test]
    fn absent_metrics_are_omitted() {
        let directive = SortDirective {
            criterion: SortCriterion::Name,
            ascending: true,
        };
        let header = HeaderLines::build(&Snapshot::default(), &directive, 4, 8);
        assert_eq!(header.uptime, None);
        assert_eq!(header.load, None);
        assert_eq!(header.cpu, None);
        assert_eq!(header.memory, None);
        // The host CPU count shows even before any usage has been sampled.
        assert_eq!(header.cores, "CPUs: 4");
        assert_eq!(header.sort, "Sorted by: name (ascending)");
        assert_eq!(header.height(), 5);
    }

    #[test]
    fn zero_uptime_is_hidden() {
        let snapshot = Snapshot {
            uptime: Some(Duration::ZERO),
            ..Snapshot::default()
        };
        let header = HeaderLines::build(&snapshot, &SortDirective::default(), 1, 8);
        assert_eq!(header.uptime, None);
    }

    #[test]
    fn cpu_line_caps_cores() {
        let per_core: Vec<f32> = (0..12).map(|i| i as f32).collect();
        assert_eq!(
            cpu_line(&per_core, 8).unwrap(),
            "CPU: 0.0% 1.0% 2.0% 3.0% 4.0% 5.0% 6.0% 7.0% (+4 more)"
        );
        let eight: Vec<f32> = vec![1.0; 8];
        assert!(!cpu_line(&eight, 8).unwrap().contains("more"));
    }
}
