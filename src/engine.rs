//! Sort state and row derivation for the process table.
//!
//! [`UpdateEngine`] owns the latest [`Snapshot`] and the active [`SortDirective`].
//! Whenever either changes it recomputes the visible rows with [`derive_rows`],
//! which is a pure function of the two.

use std::cmp::Ordering;

use crate::config::MAX_ROWS;
use crate::format::{format_percent, truncate_name};
use crate::system::process::ProcessSample;
use crate::system::snapshot::Snapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortCriterion {
    #[default]
    Cpu,
    Memory,
    Pid,
    Name,
}

impl SortCriterion {
    pub const ALL: [SortCriterion; 4] = [
        SortCriterion::Cpu,
        SortCriterion::Memory,
        SortCriterion::Pid,
        SortCriterion::Name,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortCriterion::Cpu => "cpu",
            SortCriterion::Memory => "memory",
            SortCriterion::Pid => "pid",
            SortCriterion::Name => "name",
        }
    }

    fn compare(self, a: &ProcessSample, b: &ProcessSample) -> Ordering {
        let primary = match self {
            SortCriterion::Cpu => a.cpu_percent.total_cmp(&b.cpu_percent),
            SortCriterion::Memory => a.mem_percent.total_cmp(&b.mem_percent),
            SortCriterion::Pid => a.pid.cmp(&b.pid),
            SortCriterion::Name => a.name.cmp(&b.name),
        };
        primary.then_with(|| a.pid.cmp(&b.pid))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortDirective {
    pub criterion: SortCriterion,
    pub ascending: bool,
}

impl Default for SortDirective {
    fn default() -> Self {
        SortDirective {
            criterion: SortCriterion::Cpu,
            ascending: false,
        }
    }
}

impl SortDirective {
    /// Selects `criterion` and flips the direction. The flip happens on every
    /// call, including when the criterion changes.
    pub fn select(&mut self, criterion: SortCriterion) {
        self.criterion = criterion;
        self.ascending = !self.ascending;
    }

    pub fn direction_label(&self) -> &'static str {
        if self.ascending {
            "ascending"
        } else {
            "descending"
        }
    }

    fn compare(&self, a: &ProcessSample, b: &ProcessSample) -> Ordering {
        let ord = self.criterion.compare(a, b);
        if self.ascending { ord } else { ord.reverse() }
    }
}

/// One formatted table line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub pid: String,
    pub user: String,
    pub cpu: String,
    pub mem: String,
    pub status: String,
    pub name: String,
}

impl DisplayRow {
    fn from_sample(sample: &ProcessSample) -> Self {
        DisplayRow {
            pid: sample.pid.to_string(),
            user: sample.user.clone(),
            cpu: format_percent(sample.cpu_percent),
            mem: format_percent(sample.mem_percent),
            status: sample.status.clone(),
            name: truncate_name(&sample.name),
        }
    }

    pub fn cells(&self) -> [&str; 6] {
        [
            self.pid.as_str(),
            self.user.as_str(),
            self.cpu.as_str(),
            self.mem.as_str(),
            self.status.as_str(),
            self.name.as_str(),
        ]
    }
}

/// Sorts the snapshot's processes under `directive` and formats at most
/// [`MAX_ROWS`] of them.
///
/// Ties on the sort key fall back to the pid, so the output depends only on the
/// set of processes and the directive, not on their order in the snapshot.
pub fn derive_rows(snapshot: &Snapshot, directive: &SortDirective) -> Vec<DisplayRow> {
    let _derive_span = tracing::debug_span!(
        "engine.derive_rows",
        processes = snapshot.processes.len(),
        criterion = directive.criterion.label(),
        ascending = directive.ascending
    )
    .entered();

    let mut ordered: Vec<&ProcessSample> = snapshot
        .processes
        .iter()
        .filter(|p| !p.name.is_empty())
        .collect();
    ordered.sort_by(|a, b| directive.compare(a, b));

    ordered
        .into_iter()
        .take(MAX_ROWS)
        .map(DisplayRow::from_sample)
        .collect()
}

#[derive(Debug, Default)]
pub struct UpdateEngine {
    snapshot: Snapshot,
    directive: SortDirective,
    rows: Vec<DisplayRow>,
}

impl UpdateEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current snapshot. Nothing from the previous one is kept.
    pub fn apply_snapshot(&mut self, snapshot: Snapshot) {
        self.snapshot = snapshot;
        self.rows = derive_rows(&self.snapshot, &self.directive);
    }

    /// Re-sorts the current snapshot; no new sample is taken.
    pub fn set_sort_criterion(&mut self, criterion: SortCriterion) {
        self.directive.select(criterion);
        tracing::debug!(
            criterion = self.directive.criterion.label(),
            ascending = self.directive.ascending,
            "sort changed"
        );
        self.rows = derive_rows(&self.snapshot, &self.directive);
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn directive(&self) -> SortDirective {
        self.directive
    }

    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }
}
