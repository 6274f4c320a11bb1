use std::sync::Arc;

use crate::application::ports::{GenerativeClient, SpeechModel};
use crate::application::services::{EnhancementService, TranscriptionService, TranslationService};

/// Per-process context handed to every request handler. Built once at
/// startup and immutable afterwards; in particular the two availability
/// facts (speech model loaded, generative service reachable) are a startup
/// snapshot and are never refreshed.
pub struct AppState<S, G>
where
    S: SpeechModel,
    G: GenerativeClient,
{
    /// `None` when the speech model failed to load; transcription
    /// endpoints answer 503 in that case.
    pub transcription_service: Option<Arc<TranscriptionService<S>>>,
    pub enhancement_service: Arc<EnhancementService<G>>,
    pub translation_service: Arc<TranslationService<G>>,
    pub generative_client: Arc<G>,
    pub generative_available: bool,
}

impl<S, G> Clone for AppState<S, G>
where
    S: SpeechModel,
    G: GenerativeClient,
{
    fn clone(&self) -> Self {
        Self {
            transcription_service: self.transcription_service.clone(),
            enhancement_service: Arc::clone(&self.enhancement_service),
            translation_service: Arc::clone(&self.translation_service),
            generative_client: Arc::clone(&self.generative_client),
            generative_available: self.generative_available,
        }
    }
}
