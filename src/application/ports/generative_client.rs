use std::time::Duration;

use async_trait::async_trait;

/// Sampling parameters and time budget for a single completion call.
/// Every call carries its own timeout; failed calls are never retried.
#[derive(Debug, Clone, Copy)]
pub struct GenerationOptions {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub num_predict: u32,
    pub timeout: Duration,
}

/// Client for the generative-model server used for text enhancement and
/// translation. The server is an opaque collaborator: prompt in, text out.
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        options: GenerationOptions,
    ) -> Result<String, GenerativeClientError>;

    /// List the models the server currently hosts. Also serves as the
    /// availability probe at startup.
    async fn list_models(&self) -> Result<serde_json::Value, GenerativeClientError>;

    /// Ask the server to download a model. Best effort; callers treat
    /// failure as advisory.
    async fn pull_model(&self, model: &str) -> Result<(), GenerativeClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum GenerativeClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
