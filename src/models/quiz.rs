//! Quiz question records produced by the generation service.

use serde::{Deserialize, Serialize};

/// Most choices a question may carry; the exam answers with `a`-`d`.
pub const MAX_OPTIONS: usize = 4;

/// A single multiple-choice question.
///
/// Wire form uses camelCase (`correctAnswer`) to match what the generation
/// prompt asks the model to emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    /// Fixed, ordered choices
    pub options: Vec<String>,
    /// Index into `options`
    pub correct_answer: usize,
    pub explanation: String,
}

impl QuizQuestion {
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        correct_answer: usize,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            options,
            correct_answer,
            explanation: explanation.into(),
        }
    }

    /// A question is usable when it has one to [`MAX_OPTIONS`] choices and
    /// the answer points at one.
    pub fn is_well_formed(&self) -> bool {
        !self.question.trim().is_empty()
            && (1..=MAX_OPTIONS).contains(&self.options.len())
            && self.correct_answer < self.options.len()
    }

    /// Whether `choice` is the right answer.
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_answer
    }

    /// Text of the correct option, if the record is well formed.
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_answer).map(String::as_str)
    }
}

/// An ordered batch of questions, replaced wholesale on every refresh.
pub type PrefetchedBatch = Vec<QuizQuestion>;

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> QuizQuestion {
        QuizQuestion::new(
            "What is 15% of 200?",
            vec!["20".into(), "30".into(), "35".into(), "40".into()],
            1,
            "0.15 * 200 = 30",
        )
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "question": "Next in series: 2, 4, 8, ?",
            "options": ["10", "12", "16", "18"],
            "correctAnswer": 2,
            "explanation": "Each term doubles."
        }"#;
        let q: QuizQuestion = serde_json::from_str(json).unwrap();
        assert_eq!(q.correct_answer, 2);
        assert_eq!(q.correct_option(), Some("16"));
        assert!(q.is_well_formed());
    }

    #[test]
    fn test_serialize_uses_correct_answer_key() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["correctAnswer"], 1);
        assert!(value.get("correct_answer").is_none());
    }

    #[test]
    fn test_out_of_range_answer_is_not_well_formed() {
        let mut q = sample();
        q.correct_answer = 4;
        assert!(!q.is_well_formed());
        assert_eq!(q.correct_option(), None);
    }

    #[test]
    fn test_empty_options_is_not_well_formed() {
        let q = QuizQuestion::new("Q", vec![], 0, "");
        assert!(!q.is_well_formed());
    }

    #[test]
    fn test_fifth_option_is_not_well_formed() {
        let mut q = sample();
        q.options.push("45".into());
        q.correct_answer = 4;
        assert!(!q.is_well_formed());
    }

    #[test]
    fn test_is_correct() {
        let q = sample();
        assert!(q.is_correct(1));
        assert!(!q.is_correct(0));
    }
}
