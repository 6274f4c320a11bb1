use async_trait::async_trait;
use serde_json::json;

use crate::application::ports::{GenerationOptions, GenerativeClient, GenerativeClientError};

/// Generative client returning a canned reply, or failing every call.
pub struct MockGenerativeClient {
    reply: Option<String>,
}

impl MockGenerativeClient {
    pub fn returning(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
        }
    }

    pub fn failing() -> Self {
        Self { reply: None }
    }
}

#[async_trait]
impl GenerativeClient for MockGenerativeClient {
    async fn generate(
        &self,
        _prompt: &str,
        _options: GenerationOptions,
    ) -> Result<String, GenerativeClientError> {
        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(GenerativeClientError::ApiRequestFailed(
                "mock failure".to_string(),
            )),
        }
    }

    async fn list_models(&self) -> Result<serde_json::Value, GenerativeClientError> {
        match &self.reply {
            Some(_) => Ok(json!({"models": [{"name": "mock-model"}]})),
            None => Err(GenerativeClientError::ApiRequestFailed(
                "mock failure".to_string(),
            )),
        }
    }

    async fn pull_model(&self, _model: &str) -> Result<(), GenerativeClientError> {
        match &self.reply {
            Some(_) => Ok(()),
            None => Err(GenerativeClientError::ApiRequestFailed(
                "mock failure".to_string(),
            )),
        }
    }
}
