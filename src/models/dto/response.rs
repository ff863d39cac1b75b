use serde::Serialize;

use crate::models::domain::Question;

/// Body returned by `POST /api/questions/generate`. Producing fewer questions
/// than requested is reported here as a success with a smaller count.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateQuestionsResponse {
    pub status: String,
    pub language: String,
    pub questions_generated: usize,
    pub message: String,
}

impl GenerateQuestionsResponse {
    pub fn new(language: &str, questions_generated: usize) -> Self {
        let message = if questions_generated > 0 {
            format!("Successfully generated {} questions", questions_generated)
        } else {
            "Could not generate questions, please try again".to_string()
        };

        Self {
            status: "success".to_string(),
            language: language.to_string(),
            questions_generated,
            message,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionListResponse {
    pub status: String,
    pub problems: Vec<Question>,
}

impl QuestionListResponse {
    pub fn new(problems: Vec<Question>) -> Self {
        Self {
            status: "success".to_string(),
            problems,
        }
    }
}
