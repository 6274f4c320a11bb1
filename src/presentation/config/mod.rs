mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{OllamaSettings, ServerSettings, Settings, WhisperSettings};
