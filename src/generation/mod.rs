//! External quiz generation service.
//!
//! The shell only depends on [`QuizGenerator`](crate::traits::QuizGenerator);
//! [`GeminiQuizGenerator`] is the production implementation.

mod gemini;
mod prompt;

pub use gemini::{parse_quiz_payload, GeminiQuizGenerator};
pub use prompt::{quiz_prompt, topic_for, DEFAULT_QUESTION_COUNT};
