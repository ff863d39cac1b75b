use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
        })
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Failure of the outbound text-generation call. Recovered inside the
/// orchestrator by substituting a fallback candidate; never surfaced to
/// callers of the pipeline.
#[derive(Debug, Clone, Error)]
pub enum ModelError {
    #[error("model transport error: {0}")]
    Transport(String),

    #[error("model call timed out")]
    Timeout,

    #[error("model returned no text")]
    EmptyResponse,
}

/// Violation of the delimiter contract by generated text. Recovered the same
/// way as [`ModelError`].
#[derive(Debug, Clone, Error)]
pub enum FormatError {
    #[error("generated text is missing the option delimiter")]
    MissingDelimiter,

    #[error("generated text is missing the answer marker")]
    MissingAnswerMarker,

    #[error("generated text splits into {0} segments, need at least 6")]
    NotEnoughSegments(usize),

    #[error("generated options are not pairwise distinct")]
    DuplicateOptions,
}
