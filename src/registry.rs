//! View registry and lazy view resolution.
//!
//! Each [`View`] owns one [`ViewSlot`]. A slot starts `Unloaded`, moves to
//! `Loading` on first navigation, and ends `Ready` or `Failed` when the
//! loader reports back through the app message channel.
//!
//! ```text
//!   Unloaded ──begin_resolve──► Loading ──resolved──► Ready
//!                                  │
//!                                  └──failed──► Failed ──begin_resolve──► Loading
//! ```

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

use crate::app::View;
use crate::error::ViewLoadError;
use crate::traits::ViewLoader;

/// Resolution state of one view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewSlot {
    #[default]
    Unloaded,
    Loading,
    Ready,
    Failed(String),
}

impl ViewSlot {
    /// Whether the renderer should show the loading fallback.
    pub fn is_pending(&self) -> bool {
        matches!(self, ViewSlot::Unloaded | ViewSlot::Loading)
    }
}

/// Slot table for every navigable view.
#[derive(Debug, Clone)]
pub struct ViewRegistry {
    slots: HashMap<View, ViewSlot>,
}

impl Default for ViewRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self {
            slots: View::ALL
                .into_iter()
                .map(|view| (view, ViewSlot::Unloaded))
                .collect(),
        }
    }

    pub fn slot(&self, view: View) -> &ViewSlot {
        static UNLOADED: ViewSlot = ViewSlot::Unloaded;
        self.slots.get(&view).unwrap_or(&UNLOADED)
    }

    /// Move an unloaded or failed slot into `Loading`.
    ///
    /// Returns `true` when the caller must start a load. Slots already
    /// loading or ready are left alone.
    pub fn begin_resolve(&mut self, view: View) -> bool {
        let slot = self.slots.entry(view).or_default();
        match *slot {
            ViewSlot::Unloaded | ViewSlot::Failed(_) => {
                *slot = ViewSlot::Loading;
                true
            }
            ViewSlot::Loading | ViewSlot::Ready => false,
        }
    }

    pub fn mark_ready(&mut self, view: View) {
        self.slots.insert(view, ViewSlot::Ready);
    }

    pub fn mark_failed(&mut self, view: View, reason: impl Into<String>) {
        self.slots.insert(view, ViewSlot::Failed(reason.into()));
    }

    /// Number of slots that finished resolving.
    pub fn ready_count(&self) -> usize {
        self.slots.values().filter(|s| **s == ViewSlot::Ready).count()
    }
}

/// Loader for the built-in views.
///
/// Feature views are compiled in; the delay stands in for the time a
/// dynamically loaded module would take, so navigation still passes through
/// the fallback.
#[derive(Debug, Clone)]
pub struct StaticViewLoader {
    delay: Duration,
}

impl StaticViewLoader {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for StaticViewLoader {
    fn default() -> Self {
        Self::new(Duration::from_millis(120))
    }
}

#[async_trait]
impl ViewLoader for StaticViewLoader {
    async fn load(&self, _view: View) -> Result<(), ViewLoadError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry_is_unloaded() {
        let registry = ViewRegistry::new();
        for view in View::ALL {
            assert_eq!(registry.slot(view), &ViewSlot::Unloaded);
        }
        assert_eq!(registry.ready_count(), 0);
    }

    #[test]
    fn test_begin_resolve_only_once() {
        let mut registry = ViewRegistry::new();
        assert!(registry.begin_resolve(View::Resume));
        assert_eq!(registry.slot(View::Resume), &ViewSlot::Loading);
        assert!(!registry.begin_resolve(View::Resume));

        registry.mark_ready(View::Resume);
        assert!(!registry.begin_resolve(View::Resume));
        assert_eq!(registry.ready_count(), 1);
    }

    #[test]
    fn test_failed_slot_can_retry() {
        let mut registry = ViewRegistry::new();
        registry.begin_resolve(View::Interview);
        registry.mark_failed(View::Interview, "boom");
        assert_eq!(
            registry.slot(View::Interview),
            &ViewSlot::Failed("boom".to_string())
        );
        assert!(!registry.slot(View::Interview).is_pending());
        assert!(registry.begin_resolve(View::Interview));
    }

    #[tokio::test]
    async fn test_static_loader_resolves() {
        let loader = StaticViewLoader::new(Duration::ZERO);
        assert!(loader.load(View::MockExam).await.is_ok());
    }
}
