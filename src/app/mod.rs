//! Application state and logic for the shell.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`View`] - Which feature screen is displayed
//! - [`ThemeSelection`] / [`ThemeMode`] - Palette and light/dark state
//! - [`AppMessage`] - Messages from background tasks
//!
//! All mutation happens on the event loop. Background work (view loads,
//! quiz prefetches) runs in detached tasks that only send [`AppMessage`]s
//! back through `message_tx`.

mod handlers;
mod messages;
mod mock_exam;
mod navigation;
mod prefetch;
mod theming;
mod types;
mod view;

pub use messages::AppMessage;
pub use mock_exam::{AdvanceOutcome, MockExamSession};
pub use navigation::SidebarItem;
pub use prefetch::PrefetchStatus;
pub use types::{ThemeMode, ThemeSelection, View};

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::adapters::ReqwestHttpClient;
use crate::config::AppConfig;
use crate::document::DocumentRoot;
use crate::generation::GeminiQuizGenerator;
use crate::models::PrefetchedBatch;
use crate::registry::{StaticViewLoader, ViewRegistry};
use crate::traits::{QuizGenerator, ViewLoader};

/// Main application state (the navigation shell)
pub struct App {
    /// Active feature view
    pub view: View,
    /// Selected color palette
    pub theme: ThemeSelection,
    /// Light/dark mode
    pub mode: ThemeMode,
    /// Whether the sidebar overlay is open
    pub sidebar_open: bool,
    /// Highlighted row in the sidebar
    pub sidebar_cursor: usize,
    /// Vertical scroll of the active view (0 = top)
    pub scroll_offset: u16,
    /// Most recent successful quiz batch
    pub prefetched: PrefetchedBatch,
    /// Progress through `prefetched` in the mock exam
    pub exam: MockExamSession,
    /// Root attributes consumed by the renderer
    pub document: DocumentRoot,
    /// Lazy resolution state per view
    pub registry: ViewRegistry,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Set whenever state changes and a redraw is needed
    pub needs_redraw: bool,
    /// Tick counter for the loading spinner
    pub tick_count: u64,
    /// Receiver for background results (taken by the run loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for background results (clone into spawned tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    generator: Arc<dyn QuizGenerator>,
    loader: Arc<dyn ViewLoader>,
    mounted: bool,
    /// Id handed to the most recently issued prefetch
    last_request_id: u64,
    /// Id of the most recently applied prefetch result
    last_applied_id: u64,
    prefetch_in_flight: usize,
    last_prefetch_error: Option<String>,
}

impl App {
    /// Create a shell with injected collaborators.
    pub fn new(generator: Arc<dyn QuizGenerator>, loader: Arc<dyn ViewLoader>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            view: View::default(),
            theme: ThemeSelection::default(),
            mode: ThemeMode::default(),
            sidebar_open: false,
            sidebar_cursor: 0,
            scroll_offset: 0,
            prefetched: Vec::new(),
            exam: MockExamSession::default(),
            document: DocumentRoot::new(),
            registry: ViewRegistry::new(),
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            message_rx: Some(message_rx),
            message_tx,
            generator,
            loader,
            mounted: false,
            last_request_id: 0,
            last_applied_id: 0,
            prefetch_in_flight: 0,
            last_prefetch_error: None,
        }
    }

    /// Create a shell wired to the Gemini generator and the built-in views.
    pub fn from_config(config: &AppConfig) -> Self {
        let http = Arc::new(ReqwestHttpClient::with_timeout(config.request_timeout));
        let generator = GeminiQuizGenerator::from_config(http, config);
        let loader = StaticViewLoader::new(config.view_load_delay);
        Self::new(Arc::new(generator), Arc::new(loader))
    }

    /// Bring the shell up: reflect theme state onto the document, start
    /// resolving the initial view, and warm the prefetch cache.
    ///
    /// Only the first call has any effect.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        tracing::info!(view = %self.view, theme = %self.theme, mode = %self.mode, "shell mounted");

        self.sync_document();
        self.ensure_resolved(self.view);
        self.refresh_prefetch();
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Apply a background result.
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::PrefetchLoaded { request_id, batch } => {
                self.apply_prefetch(request_id, batch)
            }
            AppMessage::PrefetchFailed { request_id, error } => {
                self.absorb_prefetch_failure(request_id, error)
            }
            AppMessage::ViewResolved { view } => {
                tracing::debug!(%view, "view resolved");
                self.registry.mark_ready(view);
            }
            AppMessage::ViewLoadFailed { view, error } => {
                tracing::warn!(%view, %error, "view failed to load");
                self.registry.mark_failed(view, error);
            }
        }
        self.mark_dirty();
    }

    /// Wait for the next background result and apply it.
    ///
    /// Returns `false` if the receiver was taken by a run loop.
    pub async fn process_next_message(&mut self) -> bool {
        let msg = match self.message_rx.as_mut() {
            Some(rx) => rx.recv().await,
            None => None,
        };
        match msg {
            Some(msg) => {
                self.handle_message(msg);
                true
            }
            None => false,
        }
    }

    /// Like [`App::process_next_message`], giving up after `timeout`.
    pub async fn process_next_message_within(&mut self, timeout: Duration) -> bool {
        tokio::time::timeout(timeout, self.process_next_message())
            .await
            .unwrap_or(false)
    }

    /// Advance animation state.
    ///
    /// Only redraws while something on screen is animating: the loading
    /// boundary of the current view, or prefetch progress on the mock exam.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        let exam_waiting = self.view == View::MockExam && self.prefetch_in_flight > 0;
        if self.registry.slot(self.view).is_pending() || exam_waiting {
            self.mark_dirty();
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Mark the app to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Start resolving `view` if its slot needs it.
    fn ensure_resolved(&mut self, view: View) {
        if !self.registry.begin_resolve(view) {
            return;
        }

        let loader = Arc::clone(&self.loader);
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let msg = match loader.load(view).await {
                Ok(()) => AppMessage::ViewResolved { view },
                Err(e) => AppMessage::ViewLoadFailed {
                    view,
                    error: e.to_string(),
                },
            };
            let _ = message_tx.send(msg);
        });
    }
}
