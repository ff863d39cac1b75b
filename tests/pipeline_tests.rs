use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use quizcraft_server::{
    errors::ModelError,
    models::domain::{Provenance, TextChunk},
    services::{
        fallback_generator::FallbackGenerator,
        generation_orchestrator::{GenerationOrchestrator, GenerationRequest},
        model_gateway::ModelGateway,
        prompt_builder::{PromptBuilder, TemplateSelector},
        response_validator, segmenter,
    },
};

/// Pins template selection for reproducible assertions.
struct FirstTemplate;

impl TemplateSelector for FirstTemplate {
    fn select(&self, _upper: usize) -> usize {
        0
    }
}

/// Gateway that replays a fixed script of responses, one per call.
struct ScriptedGateway {
    script: Mutex<Vec<Result<String, ModelError>>>,
}

impl ScriptedGateway {
    fn new(script: Vec<Result<String, ModelError>>) -> Self {
        Self {
            script: Mutex::new(script),
        }
    }

    fn always_failing() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl ModelGateway for ScriptedGateway {
    async fn generate(&self, _prompt: &str) -> Result<String, ModelError> {
        let mut script = self.script.lock().unwrap();
        if script.is_empty() {
            return Err(ModelError::Transport("no response scripted".into()));
        }
        script.remove(0)
    }
}

fn orchestrator(gateway: ScriptedGateway) -> GenerationOrchestrator {
    GenerationOrchestrator::new(
        Arc::new(gateway),
        PromptBuilder::new(Arc::new(FirstTemplate)),
        FallbackGenerator::new(Arc::new(FirstTemplate)),
    )
}

fn request(chunks: Vec<TextChunk>, language: &str, desired_count: usize) -> GenerationRequest {
    GenerationRequest {
        chunks,
        language: language.to_string(),
        desired_count,
        question_type: "quiz".to_string(),
        deadline: None,
    }
}

#[tokio::test]
async fn scenario_a_model_failure_yields_one_fallback_candidate() {
    let text = "Cats are mammals. They have fur and whiskers.";
    let chunks = segmenter::segment(text, 250);

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].text(), text);

    let result = orchestrator(ScriptedGateway::always_failing())
        .run(&request(chunks, "en", 1))
        .await;

    assert_eq!(result.candidates.len(), 1);
    let candidate = &result.candidates[0];
    assert_eq!(candidate.provenance, Provenance::Fallback);
    assert_eq!(candidate.answer, "Cats are mammals");
    assert_eq!(candidate.answer, candidate.options[0]);
}

#[test]
fn scenario_b_well_formed_output_parses_into_a_candidate() {
    let raw = "What is X?<$$$>A<$$$>B<$$$>C<$$$>D<$$$>$ANSWER$A";
    let candidate = response_validator::parse(raw).expect("should parse");

    assert_eq!(candidate.question, "What is X?");
    assert_eq!(candidate.options, vec!["A", "B", "C", "D"]);
    assert_eq!(candidate.answer, "A");
    assert_eq!(candidate.provenance, Provenance::Generated);
}

#[tokio::test]
async fn scenario_c_missing_answer_marker_substitutes_fallback() {
    let gateway = ScriptedGateway::new(vec![Ok(
        "What is X?<$$$>A<$$$>B<$$$>C<$$$>D<$$$>no marker".to_string()
    )]);

    let chunks = segmenter::segment("Cats are mammals. They have fur and whiskers.", 250);
    let result = orchestrator(gateway).run(&request(chunks, "en", 1)).await;

    // Exactly one candidate for the chunk, produced by the fallback path.
    assert_eq!(result.candidates.len(), 1);
    assert_eq!(result.candidates[0].provenance, Provenance::Fallback);
}

#[tokio::test]
async fn every_candidate_is_structurally_valid() {
    let gateway = ScriptedGateway::new(vec![
        Ok("Q1?<$$$>A<$$$>B<$$$>C<$$$>D<$$$>$ANSWER$B".to_string()),
        Err(ModelError::EmptyResponse),
        Ok("garbage without the contract".to_string()),
    ]);

    let text = "Photosynthesis converts sunlight into chemical energy for plants. \
                Mitochondria produce energy through cellular respiration processes. \
                Rivers carve deep valleys over long geological time periods.";
    let chunks = segmenter::segment(text, 80);
    let count = chunks.len();
    let result = orchestrator(gateway).run(&request(chunks, "en", count)).await;

    assert_eq!(result.candidates.len(), count);
    for candidate in &result.candidates {
        assert_eq!(candidate.options.len(), 4);
        for (i, option) in candidate.options.iter().enumerate() {
            assert!(
                !candidate.options[..i].contains(option),
                "duplicate option in {:?}",
                candidate
            );
        }
        if candidate.provenance == Provenance::Fallback {
            assert_eq!(candidate.answer, candidate.options[0]);
        }
    }
}

#[tokio::test]
async fn candidate_count_never_exceeds_desired_count_or_chunk_count() {
    let text = "One sentence. Two sentences. Three sentences. Four sentences.";
    let chunks = segmenter::segment(text, 20);
    let chunk_count = chunks.len();

    let result = orchestrator(ScriptedGateway::always_failing())
        .run(&request(chunks.clone(), "en", 2))
        .await;
    assert!(result.candidates.len() <= 2.min(chunk_count));

    let result = orchestrator(ScriptedGateway::always_failing())
        .run(&request(chunks, "en", 100))
        .await;
    assert!(result.candidates.len() <= chunk_count);
}

#[tokio::test]
async fn unsupported_language_silently_uses_english_templates() {
    let chunks = segmenter::segment("Katzen sind Tiere. Sie schlafen gern.", 250);

    let result = orchestrator(ScriptedGateway::always_failing())
        .run(&request(chunks, "de", 1))
        .await;

    assert_eq!(result.candidates.len(), 1);
    assert_eq!(result.language_used, "de");
    assert!(result.candidates[0]
        .question
        .starts_with("What is the primary focus"));
}
