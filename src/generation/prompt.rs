//! Prompt text for quiz generation.

/// Number of questions requested per batch.
pub const DEFAULT_QUESTION_COUNT: usize = 10;

/// Expand a category token into the topic description sent to the model.
pub fn topic_for(category: &str) -> &str {
    match category {
        "aptitude" => {
            "campus placement aptitude: quantitative aptitude, logical reasoning and verbal ability"
        }
        "technical" => "core computer science: data structures, algorithms, DBMS, OS and networks",
        "interview" => "common HR and behavioural interview scenarios",
        other => other,
    }
}

/// Build the generation prompt for `category`.
pub fn quiz_prompt(category: &str, count: usize) -> String {
    format!(
        "Generate {count} multiple-choice questions on {topic} at the difficulty of a \
         real campus recruitment test.\n\
         Respond with a JSON array only. Each element must be an object with the keys:\n\
         - \"question\": the question text\n\
         - \"options\": an array of exactly 4 answer strings\n\
         - \"correctAnswer\": the 0-based index of the correct option\n\
         - \"explanation\": one or two sentences explaining the answer",
        count = count,
        topic = topic_for(category),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aptitude_topic_expands() {
        assert!(topic_for("aptitude").contains("logical reasoning"));
    }

    #[test]
    fn test_unknown_category_passes_through() {
        assert_eq!(topic_for("probability"), "probability");
    }

    #[test]
    fn test_prompt_names_wire_keys() {
        let prompt = quiz_prompt("aptitude", 5);
        assert!(prompt.starts_with("Generate 5 multiple-choice"));
        assert!(prompt.contains("\"correctAnswer\""));
        assert!(prompt.contains("JSON array"));
    }
}
