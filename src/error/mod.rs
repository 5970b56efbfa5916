//! Error types for Campus Connect.
//!
//! The shell recognizes two domain failures, both non-fatal:
//!
//! | Error | Raised by | Shell reaction |
//! |-------|-----------|----------------|
//! | [`GenerationError`] | quiz generation service | warn, keep current batch |
//! | [`ViewLoadError`] | view loader | slot enters `Failed`, retry on demand |
//!
//! Neither is ever surfaced as a crash. Process-level plumbing (terminal,
//! dev server) uses `color_eyre::Result` instead.

mod generation;
mod view;

pub use generation::GenerationError;
pub use view::ViewLoadError;
