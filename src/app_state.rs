use std::sync::Arc;
use std::time::Duration;

use crate::{
    config::Config,
    db::Database,
    errors::{AppError, AppResult},
    repositories::MongoQuestionRepository,
    services::{
        FallbackGenerator, GenerationOrchestrator, HfTextGenerationGateway, MarkerWordDetector,
        PromptBuilder, QuestionService, RandomTemplateSelector,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub question_service: Arc<QuestionService>,
    pub db: Database,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let question_repository = Arc::new(MongoQuestionRepository::new(
            &db,
            &config.questions_collection,
        ));
        question_repository.ensure_indexes().await?;

        let http_client = reqwest::Client::builder()
            .build()
            .map_err(|err| AppError::InternalError(err.to_string()))?;
        let gateway = Arc::new(HfTextGenerationGateway::new(
            http_client,
            config.hf_model_id.clone(),
            config.hf_api_token.clone(),
            Duration::from_secs(config.model_timeout_secs),
        ));

        let selector = Arc::new(RandomTemplateSelector);
        let orchestrator = Arc::new(GenerationOrchestrator::new(
            gateway,
            PromptBuilder::new(selector.clone()),
            FallbackGenerator::new(selector),
        ));

        let request_budget = if config.generation_budget_secs > 0 {
            Some(Duration::from_secs(config.generation_budget_secs))
        } else {
            None
        };
        let question_service = Arc::new(QuestionService::new(
            question_repository,
            orchestrator,
            Arc::new(MarkerWordDetector),
            request_budget,
        ));

        Ok(Self {
            question_service,
            db,
            config: Arc::new(config),
        })
    }
}
