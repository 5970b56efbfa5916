//! Navigation methods for the App.

use super::{App, ThemeSelection, View};

/// One row of the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarItem {
    Navigate(View),
    Theme(ThemeSelection),
    ToggleMode,
}

impl SidebarItem {
    /// Sidebar rows, top to bottom.
    pub fn all() -> Vec<SidebarItem> {
        View::ALL
            .into_iter()
            .map(SidebarItem::Navigate)
            .chain(ThemeSelection::ALL.into_iter().map(SidebarItem::Theme))
            .chain(std::iter::once(SidebarItem::ToggleMode))
            .collect()
    }
}

impl App {
    /// Switch the active view.
    ///
    /// Scrolls back to the top, closes the sidebar, and starts resolving the
    /// view if it has not been resolved yet.
    pub fn set_view(&mut self, view: View) {
        if self.view != view {
            tracing::debug!(from = %self.view, to = %view, "navigate");
            self.view = view;
        }
        self.scroll_offset = 0;
        self.sidebar_open = false;
        self.ensure_resolved(view);
        self.mark_dirty();
    }

    /// Navigate by token; unknown tokens land on the dashboard.
    pub fn navigate_to_token(&mut self, token: &str) {
        self.set_view(View::from_token(token));
    }

    /// Retry resolution of the active view after a load failure.
    pub fn retry_view(&mut self) {
        self.ensure_resolved(self.view);
        self.mark_dirty();
    }

    pub fn open_sidebar(&mut self) {
        if !self.sidebar_open {
            self.sidebar_open = true;
            self.sidebar_cursor = self.view.index();
            self.mark_dirty();
        }
    }

    pub fn close_sidebar(&mut self) {
        if self.sidebar_open {
            self.sidebar_open = false;
            self.mark_dirty();
        }
    }

    pub fn toggle_sidebar(&mut self) {
        if self.sidebar_open {
            self.close_sidebar();
        } else {
            self.open_sidebar();
        }
    }

    pub fn sidebar_up(&mut self) {
        if self.sidebar_cursor > 0 {
            self.sidebar_cursor -= 1;
            self.mark_dirty();
        }
    }

    pub fn sidebar_down(&mut self) {
        let max = SidebarItem::all().len();
        if self.sidebar_cursor + 1 < max {
            self.sidebar_cursor += 1;
            self.mark_dirty();
        }
    }

    /// Act on the highlighted sidebar row.
    ///
    /// Navigation closes the sidebar; theme rows keep it open so the user
    /// can compare palettes.
    pub fn activate_sidebar_item(&mut self) {
        let Some(item) = SidebarItem::all().get(self.sidebar_cursor).copied() else {
            return;
        };
        match item {
            SidebarItem::Navigate(view) => self.set_view(view),
            SidebarItem::Theme(theme) => self.set_theme(theme),
            SidebarItem::ToggleMode => self.toggle_mode(),
        }
    }

    pub fn scroll_up(&mut self) {
        if self.scroll_offset > 0 {
            self.scroll_offset -= 1;
            self.mark_dirty();
        }
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
        self.mark_dirty();
    }
}
