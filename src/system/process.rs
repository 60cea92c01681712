use crate::config::USER_WIDTH;
use crate::format::truncate_chars;

/// A process as observed by one sampling pass.
#[derive(Clone, Debug, PartialEq)]
pub struct ProcessSample {
    pub pid: u32,
    pub name: String,
    pub cpu_percent: f32,
    pub mem_percent: f32,
    pub status: String,
    pub user: String,
}

/// Raw per-process values before ingestion. Every lookup except the pid may have
/// failed independently.
#[derive(Clone, Debug, Default)]
pub struct RawProcess {
    pub pid: u32,
    pub name: Option<String>,
    pub cpu_percent: Option<f32>,
    pub mem_percent: Option<f32>,
    pub status: Option<String>,
    pub user: Option<String>,
}

impl ProcessSample {
    /// Normalizes a raw record. Records without a name are dropped; failed
    /// percentages become 0.0 and the user is cut to its display width here, once.
    pub fn ingest(raw: RawProcess) -> Option<Self> {
        let name = raw.name.filter(|n| !n.is_empty())?;
        let user = raw.user.unwrap_or_default();
        Some(ProcessSample {
            pid: raw.pid,
            name,
            cpu_percent: sanitize_percent(raw.cpu_percent),
            mem_percent: sanitize_percent(raw.mem_percent),
            status: raw.status.unwrap_or_default(),
            user: truncate_chars(&user, USER_WIDTH),
        })
    }
}

fn sanitize_percent(value: Option<f32>) -> f32 {
    match value {
        Some(v) if v.is_finite() && v >= 0.0 => v,
        _ => 0.0,
    }
}

/// Ingests a batch of raw records, skipping the ones without a name.
pub fn ingest_all(raw: impl IntoIterator<Item = RawProcess>) -> Vec<ProcessSample> {
    raw.into_iter().filter_map(ProcessSample::ingest).collect()
}
