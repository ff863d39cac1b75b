use serde::Deserialize;
use validator::Validate;

/// Body of `POST /api/questions/generate`. The text is the already-extracted
/// plain content of a document; PDF extraction happens upstream.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuestionsRequest {
    #[validate(length(min = 1, message = "Document text must not be empty"))]
    pub text: String,

    #[validate(length(min = 1, max = 100))]
    pub question_type: String,

    pub count: u32,

    /// Language code, or "auto" to detect from the text.
    #[serde(default = "default_language")]
    pub language: String,

    #[validate(length(min = 1, max = 100))]
    pub user_id: String,
}

fn default_language() -> String {
    crate::constants::generation::DEFAULT_LANGUAGE.to_string()
}

/// Filters for `GET /api/questions`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ListQuestionsParams {
    #[validate(length(min = 1, max = 100))]
    pub question_type: String,

    pub language: Option<String>,
}
