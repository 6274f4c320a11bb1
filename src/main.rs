use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use tolkera::application::ports::GenerativeClient;
use tolkera::application::services::{EnhancementService, TranscriptionService, TranslationService};
use tolkera::infrastructure::audio::WhisperSpeechModel;
use tolkera::infrastructure::llm::OllamaClient;
use tolkera::infrastructure::observability::{TracingConfig, init_tracing};
use tolkera::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env().map_err(|e| anyhow::anyhow!(e))?;

    init_tracing(
        TracingConfig {
            environment: settings.environment.to_string(),
            json_format: std::env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
        },
        settings.server.port,
    );

    // A failed model load leaves the service up in degraded mode; the
    // transcription endpoints answer 503 until the process is restarted.
    let transcription_service = match WhisperSpeechModel::load(&settings.whisper.model_id) {
        Ok(model) => Some(Arc::new(TranscriptionService::new(Arc::new(model)))),
        Err(e) => {
            tracing::error!(error = %e, "Whisper model failed to load, transcription disabled");
            None
        }
    };

    let generative_client = Arc::new(OllamaClient::new(
        &settings.ollama.base_url,
        settings.ollama.model.clone(),
    ));

    // One-shot availability probe; the result holds for the process
    // lifetime and a later outage only degrades individual calls.
    let generative_available = match generative_client.list_models().await {
        Ok(_) => {
            tracing::info!(base_url = %settings.ollama.base_url, "Ollama service is available");
            true
        }
        Err(e) => {
            tracing::error!(error = %e, base_url = %settings.ollama.base_url, "Could not connect to Ollama");
            false
        }
    };

    if generative_available {
        let client = Arc::clone(&generative_client);
        let model = settings.ollama.model.clone();
        tokio::spawn(async move {
            match client.pull_model(&model).await {
                Ok(()) => tracing::info!(model = %model, "Model pull initiated"),
                Err(e) => tracing::warn!(error = %e, model = %model, "Could not pull model"),
            }
        });
    }

    let state = AppState {
        transcription_service,
        enhancement_service: Arc::new(EnhancementService::new(
            Arc::clone(&generative_client),
            generative_available,
        )),
        translation_service: Arc::new(TranslationService::new(
            Arc::clone(&generative_client),
            generative_available,
        )),
        generative_client,
        generative_available,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
