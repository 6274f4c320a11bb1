use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{GenerationOptions, GenerativeClient};
use crate::domain::language_name;
use crate::infrastructure::observability::sanitize_prompt;

use super::model_output::{strip_reply_prefix, strip_wrapping_quotes};

const TRANSLATION_OPTIONS: GenerationOptions = GenerationOptions {
    temperature: 0.3,
    top_k: 40,
    top_p: 0.9,
    num_predict: 300,
    timeout: Duration::from_secs(45),
};

/// Translates text into a target language via the generative service.
/// Same degradation policy as enhancement: any failure returns the input
/// unchanged, never an error.
pub struct TranslationService<G: GenerativeClient> {
    client: Arc<G>,
    available: bool,
}

impl<G: GenerativeClient> TranslationService<G> {
    pub fn new(client: Arc<G>, available: bool) -> Self {
        Self { client, available }
    }

    /// `source_code` is "auto" when the caller does not know the source
    /// language; unmapped codes are passed to the prompt as-is.
    pub async fn translate(&self, text: &str, target_code: &str, source_code: &str) -> String {
        if !self.available {
            return text.to_string();
        }

        let target_name = language_name(target_code).unwrap_or(target_code);
        let source_name = if source_code == "auto" {
            "auto-detected language"
        } else {
            language_name(source_code).unwrap_or(source_code)
        };

        let prompt = build_translation_prompt(text, source_name, target_name);

        match self.client.generate(&prompt, TRANSLATION_OPTIONS).await {
            Ok(reply) => {
                let unquoted = strip_wrapping_quotes(reply.trim());
                strip_reply_prefix(unquoted, target_name)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    target = target_code,
                    text = %sanitize_prompt(text),
                    "Translation failed, returning original text"
                );
                text.to_string()
            }
        }
    }
}

fn build_translation_prompt(text: &str, source_name: &str, target_name: &str) -> String {
    format!(
        "Translate the following text from {source} to {target}.\n\
         Provide only the translation without any explanations or additional text.\n\
         \n\
         Text to translate: \"{text}\"\n\
         \n\
         Translation in {target}:",
        source = source_name,
        target = target_name,
        text = text,
    )
}
