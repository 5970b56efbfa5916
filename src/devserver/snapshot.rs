//! Serializable picture of the shell for the status endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::app::{App, ThemeMode, ThemeSelection, View};

/// What `GET /state` returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellSnapshot {
    pub view: View,
    pub theme: ThemeSelection,
    pub mode: ThemeMode,
    pub sidebar_open: bool,
    /// Questions in the current prefetched batch
    pub prefetched: usize,
    /// Document root attributes (`data-theme`, `data-mode`)
    pub attributes: BTreeMap<String, String>,
    pub captured_at: DateTime<Utc>,
}

impl Default for ShellSnapshot {
    fn default() -> Self {
        Self {
            view: View::default(),
            theme: ThemeSelection::default(),
            mode: ThemeMode::default(),
            sidebar_open: false,
            prefetched: 0,
            attributes: BTreeMap::new(),
            captured_at: Utc::now(),
        }
    }
}

impl App {
    /// Capture the state the dev server publishes.
    pub fn snapshot(&self) -> ShellSnapshot {
        ShellSnapshot {
            view: self.view,
            theme: self.theme,
            mode: self.mode,
            sidebar_open: self.sidebar_open,
            prefetched: self.prefetched.len(),
            attributes: self.document.attributes().clone(),
            captured_at: Utc::now(),
        }
    }
}
