use super::Environment;

#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub ollama: OllamaSettings,
    pub whisper: WhisperSettings,
    pub environment: Environment,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct OllamaSettings {
    pub base_url: String,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct WhisperSettings {
    pub model_id: String,
}

impl Settings {
    /// Assembles settings from the environment, falling back to the
    /// defaults of a local single-machine deployment.
    pub fn from_env() -> Result<Self, String> {
        let environment = std::env::var("APP_ENV")
            .unwrap_or_else(|_| "local".to_string())
            .try_into()?;

        Ok(Self {
            server: ServerSettings {
                host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8000),
            },
            ollama: OllamaSettings {
                base_url: std::env::var("OLLAMA_BASE_URL")
                    .unwrap_or_else(|_| "http://localhost:11434".to_string()),
                model: std::env::var("MODEL_NAME").unwrap_or_else(|_| "gemma3n:2b".to_string()),
            },
            whisper: WhisperSettings {
                model_id: std::env::var("WHISPER_MODEL")
                    .unwrap_or_else(|_| "openai/whisper-tiny".to_string()),
            },
            environment,
        })
    }
}
