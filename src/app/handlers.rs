//! Keyboard handling.
//!
//! | Key | Sidebar closed | Sidebar open |
//! |-----|----------------|--------------|
//! | `Tab` / `m` | open sidebar | close sidebar |
//! | `Esc` | - | close sidebar |
//! | `Up`/`k`, `Down`/`j` | scroll view | move highlight |
//! | `Enter` | next question (mock exam) | activate row |
//! | `1`-`5` | jump to view | jump to view |
//! | `t` | toggle light/dark | toggle light/dark |
//! | `a`-`d` | answer (mock exam) | - |
//! | `n` | next question (mock exam) | - |
//! | `r` | retry failed view / fetch new set | - |
//! | `q`, `Ctrl+C` | quit | quit |

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{App, View};
use crate::registry::ViewSlot;

impl App {
    /// Handle one key event.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        match key.code {
            KeyCode::Char('q') => {
                self.quit();
                return;
            }
            KeyCode::Char('t') => {
                self.toggle_mode();
                return;
            }
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                self.set_view(View::ALL[index]);
                return;
            }
            KeyCode::Tab | KeyCode::Char('m') => {
                self.toggle_sidebar();
                return;
            }
            _ => {}
        }

        if self.sidebar_open {
            self.handle_sidebar_key(key.code);
        } else {
            self.handle_view_key(key.code);
        }
    }

    fn handle_sidebar_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.close_sidebar(),
            KeyCode::Up | KeyCode::Char('k') => self.sidebar_up(),
            KeyCode::Down | KeyCode::Char('j') => self.sidebar_down(),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_sidebar_item(),
            _ => {}
        }
    }

    fn handle_view_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(),
            KeyCode::Home => {
                self.scroll_offset = 0;
                self.mark_dirty();
            }
            _ => self.handle_slot_key(code),
        }
    }

    fn handle_slot_key(&mut self, code: KeyCode) {
        let slot = self.registry.slot(self.view).clone();
        match slot {
            ViewSlot::Failed(_) => {
                if code == KeyCode::Char('r') {
                    self.retry_view();
                }
            }
            ViewSlot::Ready if self.view == View::MockExam => self.handle_exam_key(code),
            _ => {}
        }
    }

    fn handle_exam_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c @ 'a'..='d') => self.exam_choose(c as usize - 'a' as usize),
            KeyCode::Char('n') | KeyCode::Enter => self.exam_next(),
            KeyCode::Char('r') => {
                self.refresh_prefetch();
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MockQuizGenerator, MockViewLoader};
    use crate::app::{SidebarItem, ThemeMode, ThemeSelection};
    use std::sync::Arc;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(
            Arc::new(MockQuizGenerator::new()),
            Arc::new(MockViewLoader::new()),
        )
    }

    #[tokio::test]
    async fn test_number_keys_navigate() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char('3')));
        assert_eq!(app.view, View::Resume);
        app.handle_key(press(KeyCode::Char('5')));
        assert_eq!(app.view, View::MockExam);
    }

    #[tokio::test]
    async fn test_sidebar_flow() {
        let mut app = app();
        app.handle_key(press(KeyCode::Tab));
        assert!(app.sidebar_open);
        assert_eq!(app.sidebar_cursor, 0);

        app.handle_key(press(KeyCode::Down));
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.view, View::Aptitude);
        assert!(!app.sidebar_open);
    }

    #[test]
    fn test_sidebar_theme_row_keeps_sidebar_open() {
        let mut app = app();
        app.open_sidebar();
        let rose = SidebarItem::all()
            .iter()
            .position(|i| *i == SidebarItem::Theme(ThemeSelection::Rose))
            .unwrap();
        for _ in 0..rose {
            app.handle_key(press(KeyCode::Char('j')));
        }
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.theme, ThemeSelection::Rose);
        assert!(app.sidebar_open);

        app.handle_key(press(KeyCode::Esc));
        assert!(!app.sidebar_open);
    }

    #[test]
    fn test_t_toggles_mode() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char('t')));
        assert_eq!(app.mode, ThemeMode::Light);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);

        let mut app = self::app();
        app.handle_key(press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_scroll_keys() {
        let mut app = app();
        app.handle_key(press(KeyCode::Down));
        app.handle_key(press(KeyCode::Down));
        assert_eq!(app.scroll_offset, 2);
        app.handle_key(press(KeyCode::Up));
        assert_eq!(app.scroll_offset, 1);
        app.handle_key(press(KeyCode::Home));
        assert_eq!(app.scroll_offset, 0);
    }
}
