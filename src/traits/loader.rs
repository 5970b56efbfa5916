//! View loader seam.

use async_trait::async_trait;

use crate::app::View;
use crate::error::ViewLoadError;

/// Resolves the presentation unit behind a [`View`].
///
/// The shell calls this at most once per navigation into an unresolved slot.
/// Returning `Ok(())` marks the view ready to render.
#[async_trait]
pub trait ViewLoader: Send + Sync {
    async fn load(&self, view: View) -> Result<(), ViewLoadError>;
}
