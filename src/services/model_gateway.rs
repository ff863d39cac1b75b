use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Fixed sampling configuration for the text-generation call. These values
/// are part of the documented behavior of the pipeline and are not re-derived
/// at call time.
#[derive(Clone, Debug, Serialize)]
pub struct SamplingConfig {
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub do_sample: bool,
    pub repetition_penalty: f32,
    pub num_return_sequences: u32,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            max_new_tokens: 300,
            temperature: 0.75,
            top_k: 50,
            top_p: 0.95,
            do_sample: true,
            repetition_penalty: 1.2,
            num_return_sequences: 1,
        }
    }
}

/// Boundary to the external generative model. One outbound call per
/// invocation, no internal retries; retry policy belongs to the orchestrator.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelGateway: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ModelError>;
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: &'a SamplingConfig,
    options: InferenceOptions,
}

#[derive(Serialize)]
struct InferenceOptions {
    wait_for_model: bool,
}

#[derive(Deserialize)]
struct InferenceOutput {
    generated_text: String,
}

/// Gateway backed by the Hugging Face inference API.
pub struct HfTextGenerationGateway {
    client: reqwest::Client,
    base_url: String,
    model_id: String,
    api_token: SecretString,
    sampling: SamplingConfig,
    timeout: Duration,
}

impl HfTextGenerationGateway {
    pub const DEFAULT_BASE_URL: &'static str = "https://api-inference.huggingface.co/models";

    pub fn new(
        client: reqwest::Client,
        model_id: impl Into<String>,
        api_token: SecretString,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            model_id: model_id.into(),
            api_token,
            sampling: SamplingConfig::default(),
            timeout,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_sampling(mut self, sampling: SamplingConfig) -> Self {
        self.sampling = sampling;
        self
    }
}

#[async_trait]
impl ModelGateway for HfTextGenerationGateway {
    async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        let url = format!("{}/{}", self.base_url, self.model_id);
        let body = InferenceRequest {
            inputs: prompt,
            parameters: &self.sampling,
            options: InferenceOptions {
                wait_for_model: true,
            },
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_token.expose_secret())
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    ModelError::Timeout
                } else {
                    ModelError::Transport(err.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(ModelError::Transport(format!(
                "model endpoint returned status {}",
                response.status()
            )));
        }

        let outputs: Vec<InferenceOutput> = response
            .json()
            .await
            .map_err(|err| ModelError::Transport(err.to_string()))?;

        let text = outputs
            .into_iter()
            .next()
            .map(|o| o.generated_text)
            .unwrap_or_default();
        let text = text.trim().to_string();

        if text.is_empty() {
            return Err(ModelError::EmptyResponse);
        }

        Ok(text)
    }
}
