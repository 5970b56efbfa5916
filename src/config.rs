//! Application configuration.
//!
//! Values come from the environment with builder overrides on top:
//!
//! | Setting | Source | Default |
//! |---------|--------|---------|
//! | `api_key` | `API_KEY`, then `VITE_API_KEY` (first non-empty) | `""` |
//! | `model` | `CAMPUS_MODEL` | `gemini-2.5-flash` |
//! | `api_base` | `CAMPUS_API_BASE` | `https://generativelanguage.googleapis.com` |
//! | `dev_server_port` | `CAMPUS_DEV_PORT` | `3000` |
//! | `log_file` | `CAMPUS_LOG_FILE` | `<tmp>/campus-connect.log` |

use std::path::PathBuf;
use std::time::Duration;

use crate::generation::DEFAULT_QUESTION_COUNT;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_DEV_SERVER_PORT: u16 = 3000;

/// Runtime configuration for the shell.
///
/// # Example
///
/// ```ignore
/// use campus_connect::config::AppConfig;
///
/// let config = AppConfig::from_env()
///     .with_serve(true)
///     .with_open_browser(false);
/// ```
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Generation service key; empty means every request fails fast
    pub api_key: String,
    pub api_base: String,
    pub model: String,
    /// Questions requested per prefetch
    pub question_count: usize,
    /// HTTP timeout for generation requests
    pub request_timeout: Duration,
    /// Start the local dev/status server alongside the TUI
    pub serve: bool,
    pub dev_server_port: u16,
    /// Open the dev server page in a browser once it is listening
    pub open_browser: bool,
    /// Simulated resolution time for feature views
    pub view_load_delay: Duration,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            question_count: DEFAULT_QUESTION_COUNT,
            request_timeout: Duration::from_secs(60),
            serve: false,
            dev_server_port: DEFAULT_DEV_SERVER_PORT,
            open_browser: true,
            view_load_delay: Duration::from_millis(120),
            log_file: std::env::temp_dir().join("campus-connect.log"),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary lookup function.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        config.api_key = resolve_api_key(&lookup);
        if let Some(model) = non_empty("CAMPUS_MODEL") {
            config.model = model;
        }
        if let Some(base) = non_empty("CAMPUS_API_BASE") {
            config.api_base = base;
        }
        if let Some(port) = non_empty("CAMPUS_DEV_PORT").and_then(|p| p.parse().ok()) {
            config.dev_server_port = port;
        }
        if let Some(path) = non_empty("CAMPUS_LOG_FILE") {
            config.log_file = PathBuf::from(path);
        }
        config
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }

    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_serve(mut self, serve: bool) -> Self {
        self.serve = serve;
        self
    }

    pub fn with_dev_server_port(mut self, port: u16) -> Self {
        self.dev_server_port = port;
        self
    }

    pub fn with_open_browser(mut self, open: bool) -> Self {
        self.open_browser = open;
        self
    }

    pub fn with_view_load_delay(mut self, delay: Duration) -> Self {
        self.view_load_delay = delay;
        self
    }

    /// URL the dev server answers on.
    pub fn dev_server_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.dev_server_port)
    }
}

/// `API_KEY` wins over `VITE_API_KEY`; empty values are skipped.
fn resolve_api_key<F>(lookup: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    ["API_KEY", "VITE_API_KEY"]
        .iter()
        .filter_map(|key| lookup(key))
        .find(|value| !value.is_empty())
        .unwrap_or_default()
}
