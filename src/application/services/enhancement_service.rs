use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{GenerationOptions, GenerativeClient};
use crate::infrastructure::observability::sanitize_prompt;

use super::model_output::strip_wrapping_quotes;

const ENHANCEMENT_OPTIONS: GenerationOptions = GenerationOptions {
    temperature: 0.3,
    top_k: 40,
    top_p: 0.9,
    num_predict: 200,
    timeout: Duration::from_secs(30),
};

/// Grammar/punctuation cleanup of a raw transcript via the generative
/// service. This step never fails: if the service was unreachable at
/// startup, or the call errors in any way, the input text is returned
/// unchanged.
pub struct EnhancementService<G: GenerativeClient> {
    client: Arc<G>,
    available: bool,
}

impl<G: GenerativeClient> EnhancementService<G> {
    pub fn new(client: Arc<G>, available: bool) -> Self {
        Self { client, available }
    }

    pub async fn enhance(&self, text: &str) -> String {
        if !self.available {
            return text.to_string();
        }

        let prompt = build_enhancement_prompt(text);

        match self.client.generate(&prompt, ENHANCEMENT_OPTIONS).await {
            Ok(reply) => strip_wrapping_quotes(reply.trim()).to_string(),
            Err(e) => {
                tracing::warn!(error = %e, text = %sanitize_prompt(text), "Enhancement failed, returning raw transcript");
                text.to_string()
            }
        }
    }
}

fn build_enhancement_prompt(text: &str) -> String {
    format!(
        "Please improve and correct the following transcribed text.\n\
         Fix grammar, punctuation, and spelling errors while maintaining the original meaning:\n\
         \n\
         Text: \"{}\"\n\
         \n\
         Improved text:",
        text
    )
}
