use std::time::Instant;

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{GenerativeClient, SpeechModel};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct TranscriptionResponse {
    pub transcription: String,
    pub enhanced_text: String,
    pub processing_time: f64,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler<S, G>(
    State(state): State<AppState<S, G>>,
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

    let audio = match read_audio_upload(multipart).await {
        Ok(audio) => audio,
        Err(response) => return response,
    };

    match transcription_service.transcribe(&audio).await {
        Ok(transcription) => {
            let enhanced_text = state.enhancement_service.enhance(&transcription).await;
            let processing_time = started.elapsed().as_secs_f64();

            tracing::info!(
                chars = transcription.len(),
                processing_time,
                "Transcription completed"
            );

            (
                StatusCode::OK,
                Json(TranscriptionResponse {
                    transcription,
                    enhanced_text,
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

/// Pulls the uploaded audio out of the multipart form. The first field is
/// the upload; its content type must be `audio/*`.
pub(super) async fn read_audio_upload(mut multipart: Multipart) -> Result<Vec<u8>, Response> {
    let field = match multipart.next_field().await {
        Ok(Some(f)) => f,
        Ok(None) => {
            tracing::warn!("Upload request with no file");
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No audio file uploaded".to_string(),
                }),
            )
                .into_response());
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read multipart: {}", e),
                }),
            )
                .into_response());
        }
    };

    let filename = field.file_name().unwrap_or("unknown").to_string();
    let content_type = field.content_type().unwrap_or("").to_string();

    if !content_type.starts_with("audio/") {
        tracing::warn!(content_type = %content_type, "Rejected non-audio upload");
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "File must be an audio file".to_string(),
            }),
        )
            .into_response());
    }

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read file: {}", e),
                }),
            )
                .into_response());
        }
    };

    tracing::debug!(filename = %filename, bytes = data.len(), "Audio upload received");

    Ok(data.to_vec())
}
