//! Quiz generation service seam.

use async_trait::async_trait;

use crate::error::GenerationError;
use crate::models::PrefetchedBatch;

/// Category token used by the shell's automatic prefetch.
pub const APTITUDE_CATEGORY: &str = "aptitude";

/// Produces a batch of quiz questions for a category token.
///
/// Implementations may fail for any reason. Callers in the shell treat every
/// failure as non-fatal.
#[async_trait]
pub trait QuizGenerator: Send + Sync {
    async fn generate(&self, category: &str) -> Result<PrefetchedBatch, GenerationError>;
}
