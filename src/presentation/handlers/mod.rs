mod health;
mod models;
mod supported_languages;
mod transcribe;
mod transcribe_and_translate;
mod translate;

pub use health::health_handler;
pub use models::models_handler;
pub use supported_languages::supported_languages_handler;
pub use transcribe::transcribe_handler;
pub use transcribe_and_translate::transcribe_and_translate_handler;
pub use translate::translate_handler;
