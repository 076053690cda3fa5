//! Diagnostic logging to disk.
//!
//! The TUI draws on the alternate screen, so `tracing` output goes to a daily
//! rolling file (`tapcoin.log.<date>`) in the configured log directory
//! (default: `~/.local/share/tapcoin/logs/`). Logging stays off unless
//! enabled in the config.

use crate::config::LoggingConfig;
use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Expand a leading `~` to the home directory.
pub fn expand_home(dir: &str) -> PathBuf {
    if let Some(rest) = dir.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    } else if dir == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(dir)
}

/// Install the global subscriber. The returned guard flushes the writer when
/// dropped and must live until shutdown. Returns `None` when disabled.
pub fn init(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    if !config.enabled {
        return Ok(None);
    }

    let log_dir = expand_home(&config.log_dir);
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let appender = tracing_appender::rolling::daily(&log_dir, "tapcoin.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .with_context(|| format!("Invalid log level {:?}", config.level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))?;

    tracing::info!(dir = %log_dir.display(), "logging started");
    Ok(Some(guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/var/log/tapcoin"), PathBuf::from("/var/log/tapcoin"));
        assert_eq!(expand_home("logs"), PathBuf::from("logs"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/logs"), home.join("logs"));
            assert_eq!(expand_home("~"), home);
        }
    }

    #[test]
    fn test_disabled_installs_nothing() {
        let cfg = LoggingConfig::default();
        assert!(init(&cfg).unwrap().is_none());
    }
}
