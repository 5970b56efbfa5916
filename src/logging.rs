//! Tracing setup.
//!
//! The TUI owns stdout, so log output goes to a file (`CAMPUS_LOG_FILE`,
//! default `<tmp>/campus-connect.log`). `RUST_LOG` overrides the default
//! filter.

use color_eyre::eyre::{eyre, Result, WrapErr};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "campus_connect=info";

/// Parse `raw` as a filter directive, falling back to [`DEFAULT_FILTER`]
/// when it is missing or invalid.
pub fn env_filter(raw: Option<&str>) -> EnvFilter {
    raw.filter(|s| !s.trim().is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber, appending to `log_file`.
pub fn init_logging(log_file: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .wrap_err_with(|| format!("cannot open log file {}", log_file.display()))?;

    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(rust_log.as_deref()))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| eyre!("failed to install tracing subscriber: {e}"))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_defaults() {
        assert_eq!(env_filter(None).to_string(), DEFAULT_FILTER);
        assert_eq!(env_filter(Some("  ")).to_string(), DEFAULT_FILTER);
    }

    #[test]
    fn test_env_filter_uses_directive() {
        assert_eq!(env_filter(Some("debug")).to_string(), "debug");
    }

    #[test]
    fn test_env_filter_rejects_garbage() {
        assert_eq!(env_filter(Some("campus_connect=loud")).to_string(), DEFAULT_FILTER);
    }
}
