//! Color palettes for the shell.
//!
//! The renderer never looks at `App::theme` directly. It resolves a
//! [`Palette`] from the `data-theme` / `data-mode` attributes on the
//! document root, so what is drawn always matches what is published.

use ratatui::style::{Color, Modifier, Style};

use crate::document::{DocumentRoot, MODE_ATTRIBUTE, THEME_ATTRIBUTE};

/// Success / correct answer - green
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117); // #04B575

/// Failure / wrong answer - red
pub const COLOR_ERROR: Color = Color::Red;

/// Resolved colors for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub accent: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub surface: Color,
}

impl Palette {
    /// Resolve from raw tokens. Unknown tokens use the defaults.
    pub fn from_tokens(theme: &str, mode: &str) -> Self {
        let accent = match theme {
            "emerald" => Color::Rgb(16, 185, 129),
            "rose" => Color::Rgb(244, 63, 94),
            "amber" => Color::Rgb(245, 158, 11),
            _ => Color::Rgb(99, 102, 241),
        };

        match mode {
            "light" => Self {
                accent,
                text: Color::Rgb(15, 23, 42),
                muted: Color::Rgb(100, 116, 139),
                border: Color::Rgb(203, 213, 225),
                surface: Color::Rgb(248, 250, 252),
            },
            _ => Self {
                accent,
                text: Color::Rgb(226, 232, 240),
                muted: Color::Rgb(100, 116, 139),
                border: Color::Rgb(51, 65, 85),
                surface: Color::Rgb(15, 23, 42),
            },
        }
    }

    pub fn from_document(document: &DocumentRoot) -> Self {
        Self::from_tokens(
            document.attribute(THEME_ATTRIBUTE).unwrap_or_default(),
            document.attribute(MODE_ATTRIBUTE).unwrap_or_default(),
        )
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }
}
