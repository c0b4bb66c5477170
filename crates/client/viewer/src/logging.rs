//! Tracing subscriber setup for host sessions.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_FILE: &str = "viewer.log";

/// Where log output goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// `<log_dir>/<session_id>/viewer.log`; a timestamped id is generated when `None`.
    SessionFile { session_id: Option<String> },
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` refines the default `info` level. For file targets the returned
/// guard must be kept alive for as long as logs should be flushed. Calling
/// this twice leaves the first subscriber in place and logs nothing new.
pub fn setup_logging(target: LogTarget) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match target {
        LogTarget::Stderr => {
            let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
            if tracing_subscriber::registry()
                .with(env_filter)
                .with(stderr_layer)
                .try_init()
                .is_err()
            {
                tracing::debug!("Tracing subscriber already installed");
            }
            Ok(None)
        }
        LogTarget::SessionFile { session_id } => {
            let session_id = session_id.unwrap_or_else(new_session_id);
            let session_log_dir = log_dir().join(&session_id);
            std::fs::create_dir_all(&session_log_dir).with_context(|| {
                format!(
                    "Failed to create log directory: {}",
                    session_log_dir.display()
                )
            })?;

            let file_appender = tracing_appender::rolling::never(&session_log_dir, LOG_FILE);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false);

            if tracing_subscriber::registry()
                .with(env_filter)
                .with(file_layer)
                .try_init()
                .is_err()
            {
                tracing::debug!("Tracing subscriber already installed");
                return Ok(None);
            }

            tracing::info!("Logging initialized: session={}", session_id);
            tracing::info!("Log file: {}/{}", session_log_dir.display(), LOG_FILE);
            Ok(Some(guard))
        }
    }
}

/// Platform cache directory for session logs.
///
/// - macOS: `~/Library/Caches/tile-access/logs`
/// - Linux: `~/.cache/tile-access/logs` (or `$XDG_CACHE_HOME/tile-access/logs`)
/// - Windows: `%LOCALAPPDATA%\tile-access\cache\logs`
/// - Fallback: `/tmp/tile-access/logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "tile-access")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/tile-access"))
        .join("logs")
}

fn new_session_id() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("session_{timestamp}")
}
