use std::time::Duration;

use super::process::ProcessSample;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadAverage {
    pub one: f64,
    pub five: f64,
    pub fifteen: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MemoryUsage {
    pub used_bytes: u64,
    pub total_bytes: u64,
    pub used_percent: f64,
}

impl MemoryUsage {
    /// Returns `None` when the host reports no memory at all.
    pub fn from_bytes(used_bytes: u64, total_bytes: u64) -> Option<Self> {
        if total_bytes == 0 {
            return None;
        }
        Some(Self {
            used_bytes,
            total_bytes,
            used_percent: used_bytes as f64 / total_bytes as f64 * 100.0,
        })
    }
}

/// One sampling pass worth of host and process metrics.
///
/// A snapshot is never patched in place: every pass produces a fresh value that
/// replaces the previous one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    pub uptime: Option<Duration>,
    pub load_average: Option<LoadAverage>,
    pub cpu_usage_per_core: Vec<f32>,
    pub memory: Option<MemoryUsage>,
    pub processes: Vec<ProcessSample>,
}

impl Snapshot {
    pub fn core_count(&self) -> usize {
        self.cpu_usage_per_core.len()
    }
}
