//! Mock exam progress over the prefetched batch.

use super::App;
use crate::models::QuizQuestion;

/// Result of moving past the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Next,
    /// No questions left in this batch
    Exhausted,
}

/// Cursor, answers and score for the current batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MockExamSession {
    /// Index of the question on screen
    pub current: usize,
    /// Choice made for the current question
    pub selected: Option<usize>,
    pub answered: usize,
    pub correct: usize,
    /// Set once the user moved past the last question
    pub finished: bool,
}

impl MockExamSession {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record a choice for the current question.
    ///
    /// The first choice per question counts; later ones are ignored.
    /// Returns `true` if the choice was recorded.
    pub fn choose(&mut self, batch: &[QuizQuestion], choice: usize) -> bool {
        if self.selected.is_some() || self.finished {
            return false;
        }
        let Some(question) = batch.get(self.current) else {
            return false;
        };
        if choice >= question.options.len() {
            return false;
        }

        self.selected = Some(choice);
        self.answered += 1;
        if question.is_correct(choice) {
            self.correct += 1;
        }
        true
    }

    pub fn advance(&mut self, batch_len: usize) -> AdvanceOutcome {
        if self.current + 1 < batch_len {
            self.current += 1;
            self.selected = None;
            AdvanceOutcome::Next
        } else {
            self.finished = true;
            AdvanceOutcome::Exhausted
        }
    }
}

impl App {
    /// Answer the question on screen with option `choice` (0-based).
    pub fn exam_choose(&mut self, choice: usize) {
        if self.exam.choose(&self.prefetched, choice) {
            self.mark_dirty();
        }
    }

    /// Move to the next question, asking for a new batch once this one runs
    /// out.
    pub fn exam_next(&mut self) {
        if self.prefetched.is_empty() {
            return;
        }
        if self.exam.finished {
            return;
        }
        if self.exam.advance(self.prefetched.len()) == AdvanceOutcome::Exhausted {
            tracing::info!(
                correct = self.exam.correct,
                total = self.prefetched.len(),
                "mock exam batch exhausted, requesting the next set"
            );
            self.refresh_prefetch();
        }
        self.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch() -> Vec<QuizQuestion> {
        vec![
            QuizQuestion::new("Q1", vec!["a".into(), "b".into()], 0, ""),
            QuizQuestion::new("Q2", vec!["a".into(), "b".into()], 1, ""),
        ]
    }

    #[test]
    fn test_choose_scores_first_answer_only() {
        let batch = batch();
        let mut session = MockExamSession::default();
        assert!(session.choose(&batch, 0));
        assert!(!session.choose(&batch, 1));
        assert_eq!(session.correct, 1);
        assert_eq!(session.answered, 1);
    }

    #[test]
    fn test_choose_rejects_out_of_range() {
        let mut session = MockExamSession::default();
        assert!(!session.choose(&batch(), 5));
        assert!(!session.choose(&[], 0));
        assert_eq!(session.answered, 0);
    }

    #[test]
    fn test_advance_until_exhausted() {
        let batch = batch();
        let mut session = MockExamSession::default();
        session.choose(&batch, 1);
        assert_eq!(session.advance(batch.len()), AdvanceOutcome::Next);
        assert_eq!(session.selected, None);
        session.choose(&batch, 1);
        assert_eq!(session.advance(batch.len()), AdvanceOutcome::Exhausted);
        assert!(session.finished);
        assert_eq!(session.correct, 1);
        assert_eq!(session.answered, 2);
    }

    #[test]
    fn test_reset() {
        let mut session = MockExamSession {
            current: 3,
            selected: Some(1),
            answered: 4,
            correct: 2,
            finished: true,
        };
        session.reset();
        assert_eq!(session, MockExamSession::default());
    }
}
