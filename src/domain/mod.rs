mod language;

pub use language::{SUPPORTED_LANGUAGES, is_supported_language, language_name};
