mod quiz;

pub use quiz::{PrefetchedBatch, QuizQuestion, MAX_OPTIONS};
