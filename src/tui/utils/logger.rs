//! File logging for the shell
//!
//! The terminal belongs to the UI, so tracing events are written to a file
//! instead of stderr.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{
    fmt::{format::Writer, time::FormatTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::error::Error;

/// `2024-01-31 12:00:00 UTC` timestamps
struct UtcTimestamp;

impl FormatTime for UtcTimestamp {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"))
    }
}

/// Install the global subscriber writing to `log_path`.
///
/// `RUST_LOG` takes precedence over the default level (`info`, or `debug`
/// when `debug` is set).
pub fn init_logger(log_path: &Path, debug: bool) -> Result<PathBuf, Error> {
    if let Some(parent) = log_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    let default_level = if debug { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_timer(UtcTimestamp)
                .with_ansi(false),
        )
        .try_init()
        .map_err(|e| Error::Other(format!("Failed to initialize logger: {}", e)))?;

    Ok(log_path.to_path_buf())
}

/// Clear the log file
pub fn clear_log(log_path: &Path) {
    if let Err(e) = fs::write(log_path, "") {
        eprintln!("Warning: Could not clear log file: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_log_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shell.log");
        fs::write(&path, "old line\n").unwrap();

        clear_log(&path);
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}
