//! Quiz prefetch cache for the mock exam.
//!
//! One batch is held at a time. Refreshes run detached; a success replaces
//! the batch wholesale, a failure is logged and leaves it untouched.
//! Overlapping refreshes are not de-duplicated: whichever resolves last
//! wins.

use std::sync::Arc;

use super::{App, AppMessage};
use crate::error::GenerationError;
use crate::models::PrefetchedBatch;
use crate::traits::APTITUDE_CATEGORY;

/// What the mock exam should say about the batch it was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefetchStatus {
    Idle,
    /// Requests issued and not yet answered
    Pending { in_flight: usize },
    /// The most recent answer was a failure
    Failed { reason: String },
}

impl App {
    /// Ask the generation service for a fresh aptitude batch.
    ///
    /// Fire-and-forget: returns the request id immediately and never
    /// blocks navigation.
    pub fn refresh_prefetch(&mut self) -> u64 {
        self.last_request_id += 1;
        let request_id = self.last_request_id;
        self.prefetch_in_flight += 1;
        tracing::debug!(request_id, category = APTITUDE_CATEGORY, "prefetch issued");

        let generator = Arc::clone(&self.generator);
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let msg = match generator.generate(APTITUDE_CATEGORY).await {
                Ok(batch) => AppMessage::PrefetchLoaded { request_id, batch },
                Err(error) => AppMessage::PrefetchFailed { request_id, error },
            };
            let _ = message_tx.send(msg);
        });

        self.mark_dirty();
        request_id
    }

    pub fn prefetch_status(&self) -> PrefetchStatus {
        if self.prefetch_in_flight > 0 {
            PrefetchStatus::Pending {
                in_flight: self.prefetch_in_flight,
            }
        } else if let Some(reason) = &self.last_prefetch_error {
            PrefetchStatus::Failed {
                reason: reason.clone(),
            }
        } else {
            PrefetchStatus::Idle
        }
    }

    /// Number of prefetch requests issued so far.
    pub fn prefetch_requests_issued(&self) -> u64 {
        self.last_request_id
    }

    pub(super) fn apply_prefetch(&mut self, request_id: u64, batch: PrefetchedBatch) {
        self.prefetch_in_flight = self.prefetch_in_flight.saturating_sub(1);
        if request_id < self.last_applied_id {
            tracing::debug!(
                request_id,
                newer = self.last_applied_id,
                "older prefetch resolved after a newer one; replacing anyway"
            );
        }
        self.last_applied_id = request_id;
        self.last_prefetch_error = None;

        tracing::info!(request_id, count = batch.len(), "prefetched quiz batch");
        self.prefetched = batch;
        self.exam.reset();
    }

    pub(super) fn absorb_prefetch_failure(&mut self, request_id: u64, error: GenerationError) {
        self.prefetch_in_flight = self.prefetch_in_flight.saturating_sub(1);
        tracing::warn!(
            request_id,
            code = error.error_code(),
            %error,
            "Auto-prefetch failed, will retry on demand."
        );
        self.last_prefetch_error = Some(error.user_message());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MockQuizGenerator, MockViewLoader};
    use crate::models::QuizQuestion;
    use std::time::Duration;

    fn question(n: usize) -> QuizQuestion {
        QuizQuestion::new(
            format!("Question {}", n),
            vec!["a".into(), "b".into(), "c".into(), "d".into()],
            n % 4,
            "explained",
        )
    }

    fn app_with(generator: MockQuizGenerator) -> App {
        App::new(Arc::new(generator), Arc::new(MockViewLoader::new()))
    }

    #[tokio::test]
    async fn test_status_transitions() {
        let generator = MockQuizGenerator::failing(GenerationError::EmptyResponse);
        let mut app = app_with(generator);
        assert_eq!(app.prefetch_status(), PrefetchStatus::Idle);

        app.refresh_prefetch();
        assert_eq!(app.prefetch_status(), PrefetchStatus::Pending { in_flight: 1 });

        assert!(app.process_next_message_within(Duration::from_secs(1)).await);
        assert!(matches!(app.prefetch_status(), PrefetchStatus::Failed { .. }));
    }

    #[tokio::test]
    async fn test_success_clears_failure_and_resets_exam() {
        let generator = MockQuizGenerator::new();
        generator.push(crate::adapters::mock::MockOutcome::Fail(
            GenerationError::EmptyResponse,
        ));
        generator.set_fallback(crate::adapters::mock::MockOutcome::Batch(vec![
            question(1),
            question(2),
        ]));
        let mut app = app_with(generator);

        app.refresh_prefetch();
        app.process_next_message_within(Duration::from_secs(1)).await;
        assert!(app.prefetched.is_empty());

        app.exam.current = 1;
        app.refresh_prefetch();
        app.process_next_message_within(Duration::from_secs(1)).await;
        assert_eq!(app.prefetched.len(), 2);
        assert_eq!(app.prefetch_status(), PrefetchStatus::Idle);
        assert_eq!(app.exam.current, 0);
    }

    #[tokio::test]
    async fn test_request_ids_increase() {
        let mut app = app_with(MockQuizGenerator::returning(vec![question(1)]));
        assert_eq!(app.refresh_prefetch(), 1);
        assert_eq!(app.refresh_prefetch(), 2);
        assert_eq!(app.prefetch_requests_issued(), 2);
    }
}
