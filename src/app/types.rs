//! Type definitions for the shell state.
//!
//! Contains the closed enumerations the shell navigates and themes with:
//! - [`View`] - Which feature screen is active
//! - [`ThemeSelection`] - Which color palette is selected
//! - [`ThemeMode`] - Light or dark rendering
//!
//! Every enumeration has a stable string token. Tokens are what gets written
//! to the document root and what the dev server reports.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents which feature screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Dashboard,
    Aptitude,
    Resume,
    Interview,
    MockExam,
}

impl View {
    /// All views in sidebar order.
    pub const ALL: [View; 5] = [
        View::Dashboard,
        View::Aptitude,
        View::Resume,
        View::Interview,
        View::MockExam,
    ];

    /// Stable token for this view.
    pub fn token(self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Aptitude => "aptitude",
            View::Resume => "resume",
            View::Interview => "interview",
            View::MockExam => "mock_exam",
        }
    }

    /// Resolve a token to a view.
    ///
    /// Unknown tokens fall back to [`View::Dashboard`]; this is the defined
    /// default route, not an error.
    pub fn from_token(token: &str) -> View {
        View::ALL
            .into_iter()
            .find(|v| v.token() == token)
            .unwrap_or_default()
    }

    /// Human readable label used by the sidebar.
    pub fn label(self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Aptitude => "Aptitude Prep",
            View::Resume => "Resume Builder",
            View::Interview => "Interview Questions",
            View::MockExam => "Mock Exam",
        }
    }

    /// Position in [`View::ALL`], used for number-key shortcuts.
    pub fn index(self) -> usize {
        View::ALL.iter().position(|v| *v == self).unwrap_or(0)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Color palette selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeSelection {
    #[default]
    Midnight,
    Emerald,
    Rose,
    Amber,
}

impl ThemeSelection {
    pub const ALL: [ThemeSelection; 4] = [
        ThemeSelection::Midnight,
        ThemeSelection::Emerald,
        ThemeSelection::Rose,
        ThemeSelection::Amber,
    ];

    /// Stable token for this palette (the `data-theme` value).
    pub fn token(self) -> &'static str {
        match self {
            ThemeSelection::Midnight => "midnight",
            ThemeSelection::Emerald => "emerald",
            ThemeSelection::Rose => "rose",
            ThemeSelection::Amber => "amber",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeSelection::Midnight => "Midnight",
            ThemeSelection::Emerald => "Emerald",
            ThemeSelection::Rose => "Rose",
            ThemeSelection::Amber => "Amber",
        }
    }
}

impl fmt::Display for ThemeSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Light/dark rendering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    /// Stable token for this mode (the `data-mode` value).
    pub fn token(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// The other mode.
    pub fn flipped(self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
