pub mod fallback_generator;
pub mod generation_orchestrator;
pub mod key_terms;
pub mod language;
pub mod model_gateway;
pub mod prompt_builder;
pub mod question_service;
pub mod response_validator;
pub mod segmenter;

pub use fallback_generator::FallbackGenerator;
pub use generation_orchestrator::{GenerationOrchestrator, GenerationRequest};
pub use language::{LanguageDetector, MarkerWordDetector};
pub use model_gateway::{HfTextGenerationGateway, ModelGateway, SamplingConfig};
pub use prompt_builder::{PromptBuilder, RandomTemplateSelector, TemplateSelector};
pub use question_service::QuestionService;
