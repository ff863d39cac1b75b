use std::sync::Arc;
use std::time::Duration;

use validator::Validate;

use crate::{
    constants::generation::DEFAULT_MAX_CHUNK_LEN,
    errors::{AppError, AppResult},
    models::{
        domain::Question,
        dto::{
            request::{GenerateQuestionsRequest, ListQuestionsParams},
            response::{GenerateQuestionsResponse, QuestionListResponse},
        },
    },
    repositories::QuestionRepository,
    services::{
        generation_orchestrator::{GenerationOrchestrator, GenerationRequest},
        language::{resolve_language, LanguageDetector},
        segmenter,
    },
};

/// Request-level glue above the pipeline: validates input, resolves the
/// language, segments the text, runs the orchestrator and persists whatever
/// it produced. Producing fewer questions than requested is a success.
pub struct QuestionService {
    repository: Arc<dyn QuestionRepository>,
    orchestrator: Arc<GenerationOrchestrator>,
    detector: Arc<dyn LanguageDetector>,
    request_budget: Option<Duration>,
}

impl QuestionService {
    pub fn new(
        repository: Arc<dyn QuestionRepository>,
        orchestrator: Arc<GenerationOrchestrator>,
        detector: Arc<dyn LanguageDetector>,
        request_budget: Option<Duration>,
    ) -> Self {
        Self {
            repository,
            orchestrator,
            detector,
            request_budget,
        }
    }

    pub async fn generate_questions(
        &self,
        request: GenerateQuestionsRequest,
    ) -> AppResult<GenerateQuestionsResponse> {
        request.validate()?;

        let language = resolve_language(&request.language, &request.text, self.detector.as_ref());

        let chunks = segmenter::segment(&request.text, DEFAULT_MAX_CHUNK_LEN);
        if chunks.is_empty() {
            return Err(AppError::ValidationError(
                "Document contains no extractable text".to_string(),
            ));
        }

        log::info!(
            "generating up to {} questions from {} chunks (language: {})",
            request.count,
            chunks.len(),
            language
        );

        let generation_request = GenerationRequest {
            chunks,
            language: language.clone(),
            desired_count: request.count as usize,
            question_type: request.question_type.clone(),
            deadline: self.request_budget,
        };
        let result = self.orchestrator.run(&generation_request).await;

        let mut saved = 0;
        for candidate in result.candidates {
            let question = Question::from_candidate(
                candidate,
                &generation_request.question_type,
                &result.language_used,
                &request.user_id,
            );
            self.repository.insert(question).await?;
            saved += 1;
        }

        Ok(GenerateQuestionsResponse::new(&result.language_used, saved))
    }

    pub async fn list_questions(
        &self,
        params: ListQuestionsParams,
    ) -> AppResult<QuestionListResponse> {
        params.validate()?;

        let problems = self
            .repository
            .list(&params.question_type, params.language.as_deref())
            .await?;
        Ok(QuestionListResponse::new(problems))
    }

    pub async fn list_questions_by_user(
        &self,
        user_id: &str,
        params: ListQuestionsParams,
    ) -> AppResult<QuestionListResponse> {
        params.validate()?;

        let problems = self
            .repository
            .list_by_user(user_id, &params.question_type, params.language.as_deref())
            .await?;
        Ok(QuestionListResponse::new(problems))
    }

    pub async fn delete_question(&self, id: &str) -> AppResult<()> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound(format!(
                "Question with id '{}' not found",
                id
            )));
        }
        Ok(())
    }
}
