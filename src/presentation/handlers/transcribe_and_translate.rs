use std::time::Instant;

use axum::Json;
use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::ports::{GenerativeClient, SpeechModel};
use crate::domain::is_supported_language;
use crate::presentation::state::AppState;

use super::transcribe::read_audio_upload;

#[derive(Deserialize)]
pub struct TranslateTargetParams {
    #[serde(default = "default_target_language")]
    pub target_language: String,
}

fn default_target_language() -> String {
    "en".to_string()
}

#[derive(Serialize)]
pub struct TranscriptionTranslationResponse {
    pub transcription: String,
    pub enhanced_text: String,
    pub translated_text: String,
    pub target_language: String,
    pub processing_time: f64,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// The full pipeline: transcribe the upload, enhance the transcript, then
/// translate the enhanced text.
#[tracing::instrument(skip(state, params, multipart))]
pub async fn transcribe_and_translate_handler<S, G>(
    State(state): State<AppState<S, G>>,
    Query(params): Query<TranslateTargetParams>,
    multipart: Multipart,
) -> Response
where
    S: SpeechModel + 'static,
    G: GenerativeClient + 'static,
{
    let started = Instant::now();

    let Some(transcription_service) = state.transcription_service.as_ref() else {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                error: "Whisper model not loaded".to_string(),
            }),
        )
            .into_response();
    };

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

    let audio = match read_audio_upload(multipart).await {
        Ok(audio) => audio,
        Err(response) => return response,
    };

    match transcription_service.transcribe(&audio).await {
        Ok(transcription) => {
            let enhanced_text = state.enhancement_service.enhance(&transcription).await;
            let translated_text = state
                .translation_service
                .translate(&enhanced_text, &params.target_language, "auto")
                .await;
            let processing_time = started.elapsed().as_secs_f64();

            tracing::info!(
                chars = transcription.len(),
                target = %params.target_language,
                processing_time,
                "Transcription and translation completed"
            );

            (
                StatusCode::OK,
                Json(TranscriptionTranslationResponse {
                    transcription,
                    enhanced_text,
                    translated_text,
                    target_language: params.target_language,
                    processing_time,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Transcription failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Transcription failed: {}", e),
                }),
            )
                .into_response()
        }
    }
}
