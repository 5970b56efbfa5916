//! Theme and mode state mirrored onto the document root.

mod common;

use campus_connect::adapters::{MockQuizGenerator, MockViewLoader};
use campus_connect::app::{ThemeMode, ThemeSelection};
use campus_connect::document::{MODE_ATTRIBUTE, THEME_ATTRIBUTE};
use common::shell_with;

#[tokio::test]
async fn test_mount_writes_initial_attributes() {
    let mut app = shell_with(&MockQuizGenerator::new(), &MockViewLoader::new());
    assert_eq!(app.document.attribute(THEME_ATTRIBUTE), None);

    app.mount();
    assert_eq!(app.document.attribute(THEME_ATTRIBUTE), Some("midnight"));
    assert_eq!(app.document.attribute(MODE_ATTRIBUTE), Some("dark"));
}

#[tokio::test]
async fn test_set_theme_is_reflected_and_idempotent() {
    let mut app = shell_with(&MockQuizGenerator::new(), &MockViewLoader::new());
    app.mount();

    for theme in ThemeSelection::ALL {
        app.set_theme(theme);
        assert_eq!(app.document.attribute(THEME_ATTRIBUTE), Some(theme.token()));
    }

    app.set_theme(ThemeSelection::Rose);
    let revision = app.document.revision();
    app.needs_redraw = false;

    app.set_theme(ThemeSelection::Rose);
    assert_eq!(app.document.revision(), revision);
    assert!(!app.needs_redraw);
}

#[tokio::test]
async fn test_toggle_mode_twice_is_identity() {
    let mut app = shell_with(&MockQuizGenerator::new(), &MockViewLoader::new());
    app.mount();

    for start in [ThemeMode::Dark, ThemeMode::Light] {
        app.set_mode(start);
        let attribute = app.document.attribute(MODE_ATTRIBUTE).map(str::to_string);

        app.toggle_mode();
        assert_eq!(app.mode, start.flipped());
        app.toggle_mode();

        assert_eq!(app.mode, start);
        assert_eq!(
            app.document.attribute(MODE_ATTRIBUTE).map(str::to_string),
            attribute
        );
    }
}

#[tokio::test]
async fn test_theme_and_mode_are_independent() {
    let mut app = shell_with(&MockQuizGenerator::new(), &MockViewLoader::new());
    app.mount();

    app.set_theme(ThemeSelection::Amber);
    app.toggle_mode();
    assert_eq!(app.theme, ThemeSelection::Amber);
    assert_eq!(app.document.attribute(THEME_ATTRIBUTE), Some("amber"));
    assert_eq!(app.document.attribute(MODE_ATTRIBUTE), Some("light"));
}
