use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{GenerationOptions, GenerativeClient, GenerativeClientError};

const TAGS_TIMEOUT: Duration = Duration::from_secs(10);
const PULL_TIMEOUT: Duration = Duration::from_secs(300);

/// Adapter for the Ollama HTTP API. Completion calls go through
/// `/api/generate` with streaming disabled; `/api/tags` doubles as the
/// availability probe. Calls carry per-operation timeouts and are never
/// retried.
pub struct OllamaClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(base_url: &str, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        }
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: SamplingOptions,
}

#[derive(Serialize)]
struct SamplingOptions {
    temperature: f32,
    top_k: u32,
    top_p: f32,
    num_predict: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

#[derive(Serialize)]
struct PullRequest<'a> {
    name: &'a str,
}

#[async_trait]
impl GenerativeClient for OllamaClient {
    async fn generate(
        &self,
        prompt: &str,
        options: GenerationOptions,
    ) -> Result<String, GenerativeClientError> {
        let url = format!("{}/api/generate", self.base_url);
        let body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: SamplingOptions {
                temperature: options.temperature,
                top_k: options.top_k,
                top_p: options.top_p,
                num_predict: options.num_predict,
            },
        };

        tracing::debug!(model = %self.model, prompt_chars = prompt.len(), "Sending completion request");

        let response = self
            .client
            .post(&url)
            .timeout(options.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerativeClientError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(GenerativeClientError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GenerativeClientError::InvalidResponse(e.to_string()))?;

        Ok(parsed.response)
    }

    async fn list_models(&self) -> Result<serde_json::Value, GenerativeClientError> {
        let url = format!("{}/api/tags", self.base_url);

        let response = self
            .client
            .get(&url)
            .timeout(TAGS_TIMEOUT)
            .send()
            .await
            .map_err(|e| GenerativeClientError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            return Err(GenerativeClientError::ApiRequestFailed(format!(
                "status {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| GenerativeClientError::InvalidResponse(e.to_string()))
    }

    async fn pull_model(&self, model: &str) -> Result<(), GenerativeClientError> {
        let url = format!("{}/api/pull", self.base_url);

        let response = self
            .client
            .post(&url)
            .timeout(PULL_TIMEOUT)
            .json(&PullRequest { name: model })
            .send()
            .await
            .map_err(|e| GenerativeClientError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            return Err(GenerativeClientError::ApiRequestFailed(format!(
                "status {}",
                response.status()
            )));
        }

        Ok(())
    }
}
