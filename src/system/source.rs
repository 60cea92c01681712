use std::sync::Mutex;

use super::collector::Collector;
use super::snapshot::Snapshot;

/// Produces point-in-time snapshots. Implementations may block for as long as
/// they need; callers run them off the event loop.
pub trait MetricsSource: Send + Sync + 'static {
    fn sample(&self) -> Snapshot;

    /// Logical CPUs on the host. Does not require a sampling pass.
    fn cpu_count(&self) -> usize;
}

/// The host's own metrics, read through `sysinfo`.
///
/// Overlapping sample requests queue on the collector lock: CPU usage is a delta
/// between two refreshes of the same `System`, so the state has to be shared.
pub struct HostSource {
    collector: Mutex<Collector>,
    cpu_count: usize,
}

impl HostSource {
    pub fn new() -> Self {
        let collector = Collector::new();
        Self {
            cpu_count: collector.cpu_count(),
            collector: Mutex::new(collector),
        }
    }
}

impl Default for HostSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsSource for HostSource {
    fn sample(&self) -> Snapshot {
        // Poisoned only by a panicking sample; the next refresh overwrites it.
        let mut collector = self
            .collector
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        collector.sample()
    }

    fn cpu_count(&self) -> usize {
        self.cpu_count
    }
}

/// Replays a fixed snapshot.
pub struct StaticSource(pub Snapshot);

impl MetricsSource for StaticSource {
    fn sample(&self) -> Snapshot {
        self.0.clone()
    }

    fn cpu_count(&self) -> usize {
        self.0.core_count()
    }
}
