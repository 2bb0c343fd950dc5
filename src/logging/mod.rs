//! Diagnostic logging setup.
//!
//! Installs a `tracing` subscriber for the process. When file logging is
//! enabled, output goes to a daily file named `crabprofile_<date>.log` in the
//! configured log directory (default: `~/.local/share/crabprofile/logs/`);
//! otherwise it goes to stderr. `RUST_LOG` overrides the configured level.
//!
//! Account code never logs usernames or passwords.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// File name for the log of a given day.
pub fn log_file_name(date: NaiveDate) -> String {
    format!("crabprofile_{}.log", date.format("%Y-%m-%d"))
}

/// Today's log file under the configured directory.
pub fn log_file_path(config: &LoggingConfig) -> PathBuf {
    config
        .log_dir_path()
        .join(log_file_name(chrono::Local::now().date_naive()))
}

fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level)
            .with_context(|| format!("Invalid log level '{}'", config.level)),
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(config)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if !config.enabled {
        return builder
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e));
    }

    let path = log_file_path(config);
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    builder
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(log_file_name(date), "crabprofile_2024-03-09.log");
    }

    #[test]
    fn test_log_file_path_uses_config_dir() {
        let config = LoggingConfig {
            enabled: true,
            log_dir: "/tmp/crabprofile-logs".into(),
            level: "debug".into(),
        };
        let path = log_file_path(&config);
        assert!(path.starts_with("/tmp/crabprofile-logs"));
        assert!(path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with("crabprofile_") && n.ends_with(".log")));
    }

    #[test]
    fn test_invalid_level_is_rejected() {
        let config = LoggingConfig {
            level: "crabprofile=verbose".into(),
            ..LoggingConfig::default()
        };
        if std::env::var_os("RUST_LOG").is_none() {
            assert!(env_filter(&config).is_err());
        }
    }
}
