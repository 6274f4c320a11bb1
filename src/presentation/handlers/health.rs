use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{GenerativeClient, SpeechModel};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub whisper_loaded: bool,
    pub ollama_available: bool,
}

/// Startup snapshot only: neither flag is re-probed after initialization.
pub async fn health_handler<S, G>(State(state): State<AppState<S, G>>) -> impl IntoResponse
where
    S: SpeechModel + 'static,
    G: GenerativeClient + 'static,
{
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            whisper_loaded: state.transcription_service.is_some(),
            ollama_available: state.generative_available,
        }),
    )
}
