use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing_subscriber::EnvFilter;

/// Names the file that receives JSON log lines. Unset means no logging: the
/// terminal belongs to the dashboard, so nothing is ever written to stderr.
pub const LOG_ENV: &str = "PROCTOP_LOG";

pub fn init_from_env() -> Result<()> {
    match std::env::var_os(LOG_ENV) {
        Some(path) if !path.is_empty() => init_json_file(Path::new(&path)),
        _ => Ok(()),
    }
}

/// Installs a global JSON subscriber writing to `path`, filtered by `RUST_LOG`
/// (default `debug`).
pub fn init_json_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = File::create(path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    tracing_subscriber::fmt()
        .with_ansi(false)
        .json()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| eyre!("failed to set tracing subscriber: {e}"))
}
