use std::time::Duration;

use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System, UpdateKind, Users};

use super::process::{RawProcess, ingest_all};
use super::snapshot::{LoadAverage, MemoryUsage, Snapshot};

/// Wraps a `sysinfo::System` so consecutive samples can compute CPU deltas.
pub struct Collector {
    sys: System,
    users: Users,
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

impl Collector {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_memory();
        sys.refresh_cpu_all();
        sys.refresh_processes_specifics(ProcessesToUpdate::All, true, process_refresh_kind());
        Collector {
            sys,
            users: Users::new_with_refreshed_list(),
        }
    }

    /// Logical CPUs seen by the initial refresh.
    pub fn cpu_count(&self) -> usize {
        self.sys.cpus().len()
    }

    pub fn sample(&mut self) -> Snapshot {
        let _sample_span = tracing::debug_span!("collector.sample").entered();

        self.sys.refresh_memory();
        self.sys.refresh_cpu_usage();
        self.sys
            .refresh_processes_specifics(ProcessesToUpdate::All, true, process_refresh_kind());
        self.users.refresh();

        let snapshot = self.build_snapshot();
        tracing::debug!(
            processes = snapshot.processes.len(),
            cores = snapshot.core_count(),
            "sample complete"
        );
        snapshot
    }

    fn build_snapshot(&self) -> Snapshot {
        let total_memory = self.sys.total_memory();

        let raw = self.sys.processes().iter().map(|(pid, process)| {
            let name = process.name().to_string_lossy().to_string();
            let mem_percent = if total_memory > 0 {
                Some((process.memory() as f64 / total_memory as f64 * 100.0) as f32)
            } else {
                None
            };
            let user = process
                .user_id()
                .and_then(|uid| self.users.get_user_by_id(uid))
                .map(|user| user.name().to_string());

            RawProcess {
                pid: pid.as_u32(),
                name: Some(name),
                cpu_percent: Some(process.cpu_usage()),
                mem_percent,
                status: Some(process.status().to_string()),
                user,
            }
        });

        Snapshot {
            uptime: uptime(),
            load_average: load_average(),
            cpu_usage_per_core: self.sys.cpus().iter().map(|cpu| cpu.cpu_usage()).collect(),
            memory: MemoryUsage::from_bytes(self.sys.used_memory(), total_memory),
            processes: ingest_all(raw),
        }
    }
}

fn process_refresh_kind() -> ProcessRefreshKind {
    ProcessRefreshKind::nothing()
        .with_cpu()
        .with_memory()
        .with_user(UpdateKind::OnlyIfNotSet)
}

fn uptime() -> Option<Duration> {
    match System::uptime() {
        0 => None,
        secs => Some(Duration::from_secs(secs)),
    }
}

// Platforms without load averages report all zeros.
fn load_average() -> Option<LoadAverage> {
    let load = System::load_average();
    let values = [load.one, load.five, load.fifteen];
    if values.iter().all(|v| *v == 0.0) || values.iter().any(|v| !v.is_finite()) {
        return None;
    }
    Some(LoadAverage {
        one: load.one,
        five: load.five,
        fifteen: load.fifteen,
    })
}
