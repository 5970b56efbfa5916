//! AppMessage enum for async communication within the application.

use crate::error::GenerationError;
use crate::models::PrefetchedBatch;

use super::View;

/// Results delivered from background tasks to the event loop.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A prefetch request produced a batch
    PrefetchLoaded {
        request_id: u64,
        batch: PrefetchedBatch,
    },
    /// A prefetch request failed; the current batch stays
    PrefetchFailed {
        request_id: u64,
        error: GenerationError,
    },
    /// A view finished resolving
    ViewResolved { view: View },
    /// A view could not be resolved
    ViewLoadFailed { view: View, error: String },
}
