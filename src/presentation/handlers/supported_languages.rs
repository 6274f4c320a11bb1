use std::collections::BTreeMap;

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::SUPPORTED_LANGUAGES;

#[derive(Serialize)]
pub struct SupportedLanguagesResponse {
    pub languages: BTreeMap<&'static str, &'static str>,
}

pub async fn supported_languages_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(SupportedLanguagesResponse {
            languages: SUPPORTED_LANGUAGES.iter().copied().collect(),
        }),
    )
}
