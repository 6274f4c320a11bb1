use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{GenerativeClient, SpeechModel};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    health_handler, models_handler, supported_languages_handler,
    transcribe_and_translate_handler, transcribe_handler, translate_handler,
};
use crate::presentation::state::AppState;

// Audio uploads outgrow axum's 2 MB default body limit.
const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

pub fn create_router<S, G>(state: AppState<S, G>) -> Router
where
    S: SpeechModel + 'static,
    G: GenerativeClient + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/transcribe", post(transcribe_handler::<S, G>))
        .route("/translate", post(translate_handler::<S, G>))
        .route(
            "/transcribe-and-translate",
            post(transcribe_and_translate_handler::<S, G>),
        )
        .route("/supported-languages", get(supported_languages_handler))
        .route("/health", get(health_handler::<S, G>))
        .route("/models", get(models_handler::<S, G>))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
