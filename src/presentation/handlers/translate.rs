use std::time::Instant;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::ports::{GenerativeClient, SpeechModel};
use crate::domain::is_supported_language;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct TranslateParams {
    pub text: String,
    pub target_language: String,
    #[serde(default = "default_source_language")]
    pub source_language: String,
}

fn default_source_language() -> String {
    "auto".to_string()
}

#[derive(Serialize)]
pub struct TranslationResponse {
    pub original_text: String,
    pub translated_text: String,
    pub source_language: String,
    pub target_language: String,
    pub processing_time: f64,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, params))]
pub async fn translate_handler<S, G>(
    State(state): State<AppState<S, G>>,
    Query(params): Query<TranslateParams>,
) -> Response
where
    S: SpeechModel + 'static,
    G: GenerativeClient + 'static,
{
    let started = Instant::now();

    if !is_supported_language(&params.target_language) {
        tracing::warn!(target = %params.target_language, "Unsupported target language");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("Unsupported language: {}", params.target_language),
            }),
        )
            .into_response();
    }

    tracing::debug!(
        target = %params.target_language,
        source = %params.source_language,
        text = %sanitize_prompt(&params.text),
        "Processing translation"
    );

    let translated_text = state
        .translation_service
        .translate(
            &params.text,
            &params.target_language,
            &params.source_language,
        )
        .await;

    (
        StatusCode::OK,
        Json(TranslationResponse {
            original_text: params.text,
            translated_text,
            source_language: params.source_language,
            target_language: params.target_language,
            processing_time: started.elapsed().as_secs_f64(),
        }),
    )
        .into_response()
}
