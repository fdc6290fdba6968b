//! File logging
//!
//! The terminal belongs to the UI, so log lines go to `<data_dir>/dashview.log`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::error::{DashError, Result};

pub const LOG_FILE: &str = "dashview.log";

/// `RUST_LOG` wins over the configured filter.
pub fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Installs the global subscriber. Keep the guard alive until exit or buffered
/// lines are lost.
pub fn init(dir: &Path, filter: &str) -> Result<WorkerGuard> {
    fs::create_dir_all(dir).map_err(|err| DashError::Logging {
        message: format!("cannot create {}: {err}", dir.display()),
    })?;
    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(filter))
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| DashError::Logging {
            message: err.to_string(),
        })?;

    Ok(guard)
}

pub fn log_path(dir: &Path) -> PathBuf {
    dir.join(LOG_FILE)
}
