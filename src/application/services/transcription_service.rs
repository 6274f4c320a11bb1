use std::sync::Arc;

use crate::application::ports::{SpeechModel, TranscriptionError};

/// Runs uploaded audio through the speech model.
///
/// The model consumes a file path, so the upload is staged in a temporary
/// file scoped to this call. The file is owned by a `NamedTempFile` guard
/// and is removed when the guard drops, on success and on every error path.
pub struct TranscriptionService<S: SpeechModel> {
    model: Arc<S>,
}

impl<S: SpeechModel> TranscriptionService<S> {
    pub fn new(model: Arc<S>) -> Self {
        Self { model }
    }

    pub async fn transcribe(&self, audio: &[u8]) -> Result<String, TranscriptionError> {
        let staged = tempfile::Builder::new()
            .prefix("upload-")
            .suffix(".wav")
            .tempfile()
            .map_err(|e| TranscriptionError::TempFile(format!("create: {}", e)))?;

        std::fs::write(staged.path(), audio)
            .map_err(|e| TranscriptionError::TempFile(format!("write: {}", e)))?;

        tracing::debug!(bytes = audio.len(), path = %staged.path().display(), "Audio staged for transcription");

        let text = self.model.transcribe(staged.path()).await?;

        Ok(text.trim().to_string())
    }
}
