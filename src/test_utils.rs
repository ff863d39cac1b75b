#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{Provenance, Question, QuestionCandidate, TextChunk};

    /// Two short sentences that segment into a single chunk.
    pub fn sample_text() -> &'static str {
        "Cats are mammals. They have fur and whiskers."
    }

    pub fn sample_chunk() -> TextChunk {
        TextChunk::new(sample_text())
    }

    pub fn generated_candidate() -> QuestionCandidate {
        QuestionCandidate {
            question: "What is X?".to_string(),
            options: vec![
                "A".to_string(),
                "B".to_string(),
                "C".to_string(),
                "D".to_string(),
            ],
            answer: "A".to_string(),
            provenance: Provenance::Generated,
        }
    }

    pub fn test_question(user_id: &str) -> Question {
        Question::from_candidate(generated_candidate(), "quiz", "en", user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_sample_chunk() {
        let chunk = sample_chunk();
        assert!(!chunk.is_empty());
        assert_eq!(chunk.main_topic(), "Cats are mammals");
    }

    #[test]
    fn test_fixtures_generated_candidate() {
        let candidate = generated_candidate();
        assert_eq!(candidate.options.len(), 4);
        assert!(candidate.options.contains(&candidate.answer));
    }

    #[test]
    fn test_fixtures_test_question() {
        let question = test_question("user-1");
        assert_eq!(question.user_id, "user-1");
        assert_eq!(question.items.len(), 4);
    }
}
