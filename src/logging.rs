//! Tracing subscriber setup.
//!
//! The TUI owns the terminal, so interactive runs log to a file. Plain
//! runs log to stderr. The filter comes from `RUST_LOG` (default `info`).

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::constants::{APP_NAME, LOG_FILE};

/// Where log output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Default log file: `<data dir>/txlens/txlens.log`.
#[must_use]
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_NAME).join(LOG_FILE))
}

/// Picks the log target for a run.
#[must_use]
pub fn resolve_target(plain: bool, log_file: Option<&Path>) -> LogTarget {
    match (plain, log_file) {
        (_, Some(path)) => LogTarget::File(path.to_path_buf()),
        (true, None) => LogTarget::Stderr,
        (false, None) => default_log_path().map_or(LogTarget::Stderr, LogTarget::File),
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a subscriber is
/// already installed.
pub fn init(target: &LogTarget) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter());

    match target {
        LogTarget::Stderr => builder
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| color_eyre::eyre::eyre!("Failed to install log subscriber: {e}"))?,
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = File::options().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| color_eyre::eyre::eyre!("Failed to install log subscriber: {e}"))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_log_file_wins() {
        let path = PathBuf::from("/tmp/custom.log");
        assert_eq!(
            resolve_target(true, Some(&path)),
            LogTarget::File(path.clone())
        );
        assert_eq!(resolve_target(false, Some(&path)), LogTarget::File(path));
    }

    #[test]
    fn test_plain_logs_to_stderr() {
        assert_eq!(resolve_target(true, None), LogTarget::Stderr);
    }

    #[test]
    fn test_tui_defaults_to_log_file() {
        match resolve_target(false, None) {
            LogTarget::File(path) => assert!(path.ends_with("txlens/txlens.log")),
            LogTarget::Stderr => assert!(default_log_path().is_none()),
        }
    }
}
