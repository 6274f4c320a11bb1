use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::application::ports::{GenerativeClient, SpeechModel};
use crate::presentation::state::AppState;

/// Proxies the generative service's model list. Failures come back as an
/// `{error}` payload with HTTP 200; this endpoint never fails the request.
pub async fn models_handler<S, G>(State(state): State<AppState<S, G>>) -> Response
where
    S: SpeechModel + 'static,
    G: GenerativeClient + 'static,
{
    if !state.generative_available {
        return (StatusCode::OK, Json(json!({"error": "Ollama not available"}))).into_response();
    }

    match state.generative_client.list_models().await {
        Ok(models) => (StatusCode::OK, Json(models)).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Could not fetch model list");
            (StatusCode::OK, Json(json!({"error": e.to_string()}))).into_response()
        }
    }
}
