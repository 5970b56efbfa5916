//! Read-only view of shell state for rendering.
//!
//! The UI layer renders from [`ShellViewState`] rather than from `App`, so
//! rendering code never mutates the shell and tests can build states by
//! hand.

use crate::app::{MockExamSession, PrefetchStatus, View};
use crate::document::DocumentRoot;
use crate::models::QuizQuestion;
use crate::registry::ViewSlot;

/// Everything one frame needs.
#[derive(Debug, Clone)]
pub struct ShellViewState<'a> {
    pub view: View,
    /// Resolution state of `view`
    pub slot: &'a ViewSlot,
    pub sidebar_open: bool,
    pub sidebar_cursor: usize,
    pub scroll_offset: u16,
    /// Styling reads `data-theme` / `data-mode` from here
    pub document: &'a DocumentRoot,
    pub batch: &'a [QuizQuestion],
    pub prefetch: PrefetchStatus,
    pub exam: &'a MockExamSession,
    pub tick_count: u64,
}
