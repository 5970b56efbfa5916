//! View resolution failures.

use thiserror::Error;

use crate::app::View;

/// A view's presentation unit could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewLoadError {
    #[error("view '{view}' is not available")]
    Unavailable { view: View },

    #[error("loading view '{view}' failed: {message}")]
    Failed { view: View, message: String },
}

impl ViewLoadError {
    pub fn view(&self) -> View {
        match self {
            ViewLoadError::Unavailable { view } | ViewLoadError::Failed { view, .. } => *view,
        }
    }
}
