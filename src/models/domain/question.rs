use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where a candidate came from: the external model or the deterministic
/// heuristic generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Generated,
    Fallback,
}

impl std::fmt::Display for Provenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provenance::Generated => write!(f, "generated"),
            Provenance::Fallback => write!(f, "fallback"),
        }
    }
}

/// A structurally well-formed multiple-choice question produced by the
/// pipeline. `answer` always equals `options[0]` for fallback candidates;
/// for generated candidates the answer text is stored as the model emitted
/// it and is not forced to match an option.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionCandidate {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
    pub provenance: Provenance,
}

/// Outcome of one generation request. May hold fewer candidates than were
/// requested; that is a valid result, not an error.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct GenerationResult {
    pub candidates: Vec<QuestionCandidate>,
    pub language_used: String,
}

/// Persisted question record, one per accepted candidate.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: String,
    pub problem: String,
    pub items: Vec<String>,
    pub answer: String,
    pub question_type: String,
    pub language: String,
    pub provenance: Provenance,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

impl Question {
    pub fn from_candidate(
        candidate: QuestionCandidate,
        question_type: &str,
        language: &str,
        user_id: &str,
    ) -> Self {
        Question {
            id: Uuid::new_v4().to_string(),
            problem: candidate.question,
            items: candidate.options,
            answer: candidate.answer,
            question_type: question_type.to_string(),
            language: language.to_string(),
            provenance: candidate.provenance,
            user_id: user_id.to_string(),
            created_at: Some(Utc::now()),
            modified_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_candidate() -> QuestionCandidate {
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

    #[test]
    fn provenance_serializes_lowercase() {
        let json = serde_json::to_string(&Provenance::Fallback).expect("should serialize");
        assert_eq!(json, "\"fallback\"");

        let parsed: Provenance =
            serde_json::from_str("\"generated\"").expect("should deserialize");
        assert_eq!(parsed, Provenance::Generated);
    }

    #[test]
    fn question_from_candidate_maps_all_fields() {
        let question = Question::from_candidate(sample_candidate(), "quiz", "en", "user-1");

        assert_eq!(question.problem, "What is X?");
        assert_eq!(question.items.len(), 4);
        assert_eq!(question.answer, "A");
        assert_eq!(question.question_type, "quiz");
        assert_eq!(question.language, "en");
        assert_eq!(question.user_id, "user-1");
        assert!(question.created_at.is_some());
    }

    #[test]
    fn question_ids_are_unique() {
        let a = Question::from_candidate(sample_candidate(), "quiz", "en", "user-1");
        let b = Question::from_candidate(sample_candidate(), "quiz", "en", "user-1");
        assert_ne!(a.id, b.id);
    }
}
