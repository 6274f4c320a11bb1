use std::path::Path;

use async_trait::async_trait;

/// A loaded speech-to-text model. The caller owns the audio file and its
/// lifecycle; the model only reads from the given path.
#[async_trait]
pub trait SpeechModel: Send + Sync {
    async fn transcribe(&self, audio_path: &Path) -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("transcription failed: {0}")]
    TranscriptionFailed(String),
    #[error("model loading failed: {0}")]
    ModelLoadFailed(String),
    #[error("temporary audio file error: {0}")]
    TempFile(String),
}
