//! Palette and light/dark mode, mirrored onto the document root.

use super::{App, ThemeMode, ThemeSelection};
use crate::document::{MODE_ATTRIBUTE, THEME_ATTRIBUTE};

impl App {
    /// Select a palette and write `data-theme`.
    pub fn set_theme(&mut self, theme: ThemeSelection) {
        self.theme = theme;
        if self.document.set_attribute(THEME_ATTRIBUTE, theme.token()) {
            tracing::debug!(%theme, "theme changed");
            self.mark_dirty();
        }
    }

    /// Flip between dark and light and write `data-mode`.
    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.flipped());
    }

    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
        if self.document.set_attribute(MODE_ATTRIBUTE, mode.token()) {
            tracing::debug!(%mode, "mode changed");
            self.mark_dirty();
        }
    }

    /// Write both attributes from current state.
    pub(super) fn sync_document(&mut self) {
        self.document.set_attribute(THEME_ATTRIBUTE, self.theme.token());
        self.document.set_attribute(MODE_ATTRIBUTE, self.mode.token());
    }
}

#[cfg(test)]
mod tests {
    use crate::adapters::{MockQuizGenerator, MockViewLoader};
    use crate::app::{App, ThemeMode, ThemeSelection};
    use crate::document::{MODE_ATTRIBUTE, THEME_ATTRIBUTE};
    use std::sync::Arc;

    fn app() -> App {
        App::new(
            Arc::new(MockQuizGenerator::new()),
            Arc::new(MockViewLoader::new()),
        )
    }

    #[test]
    fn test_set_theme_writes_attribute() {
        let mut app = app();
        app.set_theme(ThemeSelection::Emerald);
        assert_eq!(app.theme, ThemeSelection::Emerald);
        assert_eq!(app.document.attribute(THEME_ATTRIBUTE), Some("emerald"));
    }

    #[test]
    fn test_toggle_mode_twice_restores() {
        let mut app = app();
        let before = app.mode;
        app.toggle_mode();
        assert_eq!(app.mode, ThemeMode::Light);
        assert_eq!(app.document.attribute(MODE_ATTRIBUTE), Some("light"));
        app.toggle_mode();
        assert_eq!(app.mode, before);
        assert_eq!(app.document.attribute(MODE_ATTRIBUTE), Some("dark"));
    }
}
