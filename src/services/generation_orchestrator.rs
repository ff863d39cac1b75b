use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use crate::{
    constants::generation::MAX_CONSECUTIVE_FAILURES,
    errors::ModelError,
    models::domain::{GenerationResult, Provenance, QuestionCandidate, TextChunk},
    services::{
        fallback_generator::FallbackGenerator, model_gateway::ModelGateway, prompt_builder::PromptBuilder,
        response_validator,
    },
};

/// One generation request, resolved before the pipeline runs: chunks are
/// already segmented and the language code is concrete (never "auto").
#[derive(Clone, Debug)]
pub struct GenerationRequest {
    pub chunks: Vec<TextChunk>,
    pub language: String,
    pub desired_count: usize,
    /// Opaque label carried through to persistence.
    pub question_type: String,
    /// Overall budget for the request. When it runs out the loop stops and
    /// whatever candidates have accumulated are returned.
    pub deadline: Option<Duration>,
}

/// Drives the pipeline across chunks, strictly sequentially: prompt, model
/// call, validation, and on any gateway or format failure an immediate
/// fallback candidate for the same chunk. Every chunk yields at most one
/// candidate, so the loop always makes forward progress.
pub struct GenerationOrchestrator {
    gateway: Arc<dyn ModelGateway>,
    prompt_builder: PromptBuilder,
    fallback: FallbackGenerator,
}

impl GenerationOrchestrator {
    pub fn new(
        gateway: Arc<dyn ModelGateway>,
        prompt_builder: PromptBuilder,
        fallback: FallbackGenerator,
    ) -> Self {
        Self {
            gateway,
            prompt_builder,
            fallback,
        }
    }

    pub async fn run(&self, request: &GenerationRequest) -> GenerationResult {
        let started = Instant::now();
        let mut candidates: Vec<QuestionCandidate> = Vec::new();
        let mut consecutive_failures: u32 = 0;
        let mut index = 0;

        while index < request.chunks.len() && candidates.len() < request.desired_count {
            let remaining = match remaining_budget(request.deadline, started) {
                BudgetState::Unbounded => None,
                BudgetState::Remaining(rem) => Some(rem),
                BudgetState::Exhausted => {
                    log::warn!(
                        "generation deadline reached after {} candidates, stopping early",
                        candidates.len()
                    );
                    break;
                }
            };

            let chunk = &request.chunks[index];
            match self.attempt(chunk, &request.language, remaining).await {
                Some(candidate) => {
                    if candidate.provenance == Provenance::Generated {
                        consecutive_failures = 0;
                    }
                    candidates.push(candidate);
                }
                None => {
                    consecutive_failures += 1;
                    log::warn!(
                        "chunk {} unusable ({} consecutive failures)",
                        index,
                        consecutive_failures
                    );
                    if consecutive_failures >= MAX_CONSECUTIVE_FAILURES {
                        // Skip one extra chunk to get out of a bad region.
                        index += 1;
                        consecutive_failures = 0;
                    }
                }
            }
            index += 1;
        }

        GenerationResult {
            candidates,
            language_used: request.language.clone(),
        }
    }

    /// One candidate attempt for one chunk. Gateway and format failures are
    /// recovered locally through the fallback generator; `None` means the
    /// chunk cannot produce a candidate at all.
    async fn attempt(
        &self,
        chunk: &TextChunk,
        language: &str,
        remaining: Option<Duration>,
    ) -> Option<QuestionCandidate> {
        if chunk.is_empty() {
            return None;
        }

        let prompt = self.prompt_builder.build_prompt(chunk, language);

        let generated = match remaining {
            Some(budget) => match tokio::time::timeout(budget, self.gateway.generate(&prompt)).await
            {
                Ok(result) => result,
                Err(_) => Err(ModelError::Timeout),
            },
            None => self.gateway.generate(&prompt).await,
        };

        match generated {
            Ok(raw_text) => match response_validator::parse(&raw_text) {
                Ok(candidate) => {
                    log::info!("generated question: {}", candidate.question);
                    return Some(candidate);
                }
                Err(err) => {
                    log::warn!("generated text failed validation: {}", err);
                }
            },
            Err(err) => {
                log::warn!("model call failed: {}", err);
            }
        }

        self.fallback.generate(chunk, language)
    }
}

enum BudgetState {
    Unbounded,
    Remaining(Duration),
    Exhausted,
}

fn remaining_budget(deadline: Option<Duration>, started: Instant) -> BudgetState {
    match deadline {
        None => BudgetState::Unbounded,
        Some(total) => {
            let elapsed = started.elapsed();
            if elapsed >= total {
                BudgetState::Exhausted
            } else {
                BudgetState::Remaining(total - elapsed)
            }
        }
    }
}
