//! Scripted quiz generator for testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::GenerationError;
use crate::models::PrefetchedBatch;
use crate::traits::QuizGenerator;

/// One scripted answer.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    Batch(PrefetchedBatch),
    Fail(GenerationError),
    /// Sleep before producing the inner outcome
    Delayed(Duration, Box<MockOutcome>),
}

impl MockOutcome {
    pub fn delayed(delay: Duration, outcome: MockOutcome) -> Self {
        MockOutcome::Delayed(delay, Box::new(outcome))
    }
}

/// Generator that replays queued outcomes in call order.
///
/// When the queue runs dry the fallback outcome is used (an
/// `EmptyResponse` failure unless configured otherwise). Every call records
/// its category token.
#[derive(Debug, Clone)]
pub struct MockQuizGenerator {
    script: Arc<Mutex<VecDeque<MockOutcome>>>,
    fallback: Arc<Mutex<MockOutcome>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockQuizGenerator {
    pub fn new() -> Self {
        Self {
            script: Arc::new(Mutex::new(VecDeque::new())),
            fallback: Arc::new(Mutex::new(MockOutcome::Fail(GenerationError::EmptyResponse))),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Generator that always returns `batch`.
    pub fn returning(batch: PrefetchedBatch) -> Self {
        let mock = Self::new();
        mock.set_fallback(MockOutcome::Batch(batch));
        mock
    }

    /// Generator that always fails with `error`.
    pub fn failing(error: GenerationError) -> Self {
        let mock = Self::new();
        mock.set_fallback(MockOutcome::Fail(error));
        mock
    }

    /// Queue an outcome for the next unanswered call.
    pub fn push(&self, outcome: MockOutcome) {
        self.script.lock().unwrap().push_back(outcome);
    }

    pub fn set_fallback(&self, outcome: MockOutcome) {
        *self.fallback.lock().unwrap() = outcome;
    }

    /// Category tokens of every call so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn next_outcome(&self) -> MockOutcome {
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.lock().unwrap().clone())
    }
}

impl Default for MockQuizGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuizGenerator for MockQuizGenerator {
    async fn generate(&self, category: &str) -> Result<PrefetchedBatch, GenerationError> {
        self.calls.lock().unwrap().push(category.to_string());

        let mut outcome = self.next_outcome();
        loop {
            match outcome {
                MockOutcome::Batch(batch) => return Ok(batch),
                MockOutcome::Fail(err) => return Err(err),
                MockOutcome::Delayed(delay, inner) => {
                    tokio::time::sleep(delay).await;
                    outcome = *inner;
                }
            }
        }
    }
}
