mod enhancement_service;
mod model_output;
mod transcription_service;
mod translation_service;

pub use enhancement_service::EnhancementService;
pub use model_output::{strip_reply_prefix, strip_wrapping_quotes};
pub use transcription_service::TranscriptionService;
pub use translation_service::TranslationService;
