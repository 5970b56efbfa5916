//! View loader double for testing.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::app::View;
use crate::error::ViewLoadError;
use crate::traits::ViewLoader;

/// Resolves every view immediately, except the ones marked as failing.
#[derive(Debug, Clone, Default)]
pub struct MockViewLoader {
    failing: Arc<Mutex<HashSet<View>>>,
    loads: Arc<Mutex<Vec<View>>>,
}

impl MockViewLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make loads of `view` fail until [`MockViewLoader::heal`] is called.
    pub fn fail(&self, view: View) {
        self.failing.lock().unwrap().insert(view);
    }

    pub fn heal(&self, view: View) {
        self.failing.lock().unwrap().remove(&view);
    }

    /// Views loaded so far, in call order.
    pub fn loads(&self) -> Vec<View> {
        self.loads.lock().unwrap().clone()
    }
}

#[async_trait]
impl ViewLoader for MockViewLoader {
    async fn load(&self, view: View) -> Result<(), ViewLoadError> {
        self.loads.lock().unwrap().push(view);
        if self.failing.lock().unwrap().contains(&view) {
            return Err(ViewLoadError::Failed {
                view,
                message: "module unavailable".to_string(),
            });
        }
        Ok(())
    }
}
