//! Application configuration with persistence.
//!
//! # Configuration File Location
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/txlens/config.json`
//! - macOS: `~/Library/Application Support/txlens/config.json`
//! - Windows: `%APPDATA%/txlens/config.json`
//!
//! # Example
//!
//! ```ignore
//! use crate::state::AppConfig;
//!
//! let mut config = AppConfig::load();
//! config.api_url = "http://localhost:9000".to_string();
//! config.save()?;
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use color_eyre::Result;
use serde::{Deserialize, Serialize};

use crate::client::HttpConfig;
use crate::client::http::DEFAULT_TIMEOUT_SECS;
use crate::constants::{APP_NAME, DEFAULT_API_URL};

// ============================================================================
// Constants
// ============================================================================

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

// ============================================================================
// AppConfig
// ============================================================================

/// Persisted application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the explorer API.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl AppConfig {
    /// Returns the path to the configuration file, creating its directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(APP_NAME);
        fs::create_dir_all(&path)?;
        path.push(CONFIG_FILE);
        Ok(path)
    }

    /// Loads the configuration, falling back to defaults on any failure.
    #[must_use]
    pub fn load() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_or_default(&path),
            Err(err) => {
                tracing::debug!("Config directory unavailable, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Loads the configuration from `path`, logging and falling back to
    /// defaults when it is missing or unreadable.
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::debug!(
                    "Config load from {} failed, using defaults: {err}",
                    path.display()
                );
                Self::default()
            }
        }
    }

    /// Loads the configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Saves the configuration to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined or the file cannot
    /// be written.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// HTTP settings derived from this configuration.
    #[must_use]
    pub fn http_config(&self) -> HttpConfig {
        HttpConfig::with_timeout(Duration::from_secs(self.timeout_secs))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    fn temp_config_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("txlens-test-{}-{name}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir.join(CONFIG_FILE)
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = temp_config_path("round-trip");
        let config = AppConfig {
            api_url: "http://localhost:9000".to_string(),
            timeout_secs: 5,
        };

        config.save_to(&path).unwrap();
        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"timeout_secs": 3}"#).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let path = temp_config_path("missing").with_file_name("does-not-exist.json");
        assert!(AppConfig::load_from(&path).is_err());
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_load_or_default_logs_fallback() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let path = temp_config_path("fallback").with_file_name("absent.json");
        let config = tracing::subscriber::with_default(subscriber, || {
            AppConfig::load_or_default(&path)
        });

        assert_eq!(config, AppConfig::default());
        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("using defaults"), "{output}");
        assert!(output.contains("absent.json"), "{output}");
    }

    #[test]
    fn test_load_or_default_reads_existing_file() {
        let path = temp_config_path("existing");
        let config = AppConfig {
            timeout_secs: 9,
            ..AppConfig::default()
        };
        config.save_to(&path).unwrap();

        assert_eq!(AppConfig::load_or_default(&path), config);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_http_config() {
        let config = AppConfig {
            timeout_secs: 7,
            ..AppConfig::default()
        };
        assert_eq!(config.http_config().timeout, Duration::from_secs(7));
    }
}
