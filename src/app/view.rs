//! View state construction for UI rendering.

use super::App;
use crate::view_state::ShellViewState;

impl App {
    /// Borrow everything the renderer needs for one frame.
    ///
    /// # Example
    ///
    /// ```ignore
    /// terminal.draw(|f| ui::render(f, &app.view_state()))?;
    /// ```
    pub fn view_state(&self) -> ShellViewState<'_> {
        ShellViewState {
            view: self.view,
            slot: self.registry.slot(self.view),
            sidebar_open: self.sidebar_open,
            sidebar_cursor: self.sidebar_cursor,
            scroll_offset: self.scroll_offset,
            document: &self.document,
            batch: &self.prefetched,
            prefetch: self.prefetch_status(),
            exam: &self.exam,
            tick_count: self.tick_count,
        }
    }
}
