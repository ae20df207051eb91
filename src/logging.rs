/// File-based tracing setup. The TUI owns stdout, so logs go to a file.
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `DAYTIMER_LOG=debug`.
pub const LOG_ENV: &str = "DAYTIMER_LOG";

/// The log file lives next to the database it describes.
pub fn log_path_for(db_path: &Path) -> PathBuf {
    db_path.with_extension("log")
}

pub fn init(log_path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("cannot open log file {}", log_path.display()))?;
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install logger: {err}"))?;
    Ok(())
}
