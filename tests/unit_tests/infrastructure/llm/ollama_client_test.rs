use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use tolkera::application::ports::{GenerationOptions, GenerativeClient, GenerativeClientError};
use tolkera::infrastructure::llm::OllamaClient;

async fn start_mock_ollama_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new()
        .route(
            "/api/generate",
            post(move || async move {
                let status = StatusCode::from_u16(response_status).unwrap();
                (status, response_body).into_response()
            }),
        )
        .route(
            "/api/tags",
            get(move || async move {
                let status = StatusCode::from_u16(response_status).unwrap();
                (status, response_body).into_response()
            }),
        )
        .route(
            "/api/pull",
            post(move || async move {
                let status = StatusCode::from_u16(response_status).unwrap();
                (status, response_body).into_response()
            }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

fn test_options() -> GenerationOptions {
    GenerationOptions {
        temperature: 0.3,
        top_k: 40,
        top_p: 0.9,
        num_predict: 200,
        timeout: Duration::from_secs(5),
    }
}

#[tokio::test]
async fn given_successful_completion_when_generating_then_returns_response_field() {
    let (base_url, shutdown_tx) =
        start_mock_ollama_server(200, r#"{"response": "Improved text."}"#).await;

    let client = OllamaClient::new(&base_url, "test-model".to_string());
    let result = client.generate("fix this", test_options()).await;

    assert_eq!(result.unwrap(), "Improved text.");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_error_status_when_generating_then_returns_api_error() {
    let (base_url, shutdown_tx) =
        start_mock_ollama_server(500, r#"{"error": "model not found"}"#).await;

    let client = OllamaClient::new(&base_url, "test-model".to_string());
    let result = client.generate("fix this", test_options()).await;

    assert!(matches!(
        result,
        Err(GenerativeClientError::ApiRequestFailed(_))
    ));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_malformed_body_when_generating_then_returns_invalid_response() {
    let (base_url, shutdown_tx) = start_mock_ollama_server(200, "definitely not json").await;

    let client = OllamaClient::new(&base_url, "test-model".to_string());
    let result = client.generate("fix this", test_options()).await;

    assert!(matches!(
        result,
        Err(GenerativeClientError::InvalidResponse(_))
    ));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_running_server_when_listing_models_then_returns_tags_payload() {
    let (base_url, shutdown_tx) =
        start_mock_ollama_server(200, r#"{"models": [{"name": "gemma3n:2b"}]}"#).await;

    let client = OllamaClient::new(&base_url, "test-model".to_string());
    let result = client.list_models().await.unwrap();

    assert_eq!(result["models"][0]["name"], "gemma3n:2b");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unreachable_server_when_listing_models_then_returns_api_error() {
    let client = OllamaClient::new("http://127.0.0.1:1", "test-model".to_string());

    let result = client.list_models().await;

    assert!(matches!(
        result,
        Err(GenerativeClientError::ApiRequestFailed(_))
    ));
}

#[tokio::test]
async fn given_running_server_when_pulling_model_then_returns_ok() {
    let (base_url, shutdown_tx) = start_mock_ollama_server(200, r#"{"status": "success"}"#).await;

    let client = OllamaClient::new(&base_url, "test-model".to_string());

    assert!(client.pull_model("gemma3n:2b").await.is_ok());
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_error_status_when_pulling_model_then_returns_api_error() {
    let (base_url, shutdown_tx) = start_mock_ollama_server(404, r#"{"error": "unknown model"}"#).await;

    let client = OllamaClient::new(&base_url, "test-model".to_string());
    let result = client.pull_model("nope").await;

    assert!(matches!(
        result,
        Err(GenerativeClientError::ApiRequestFailed(_))
    ));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_trailing_slash_base_url_when_generating_then_still_resolves() {
    let (base_url, shutdown_tx) = start_mock_ollama_server(200, r#"{"response": "ok"}"#).await;

    let client = OllamaClient::new(&format!("{}/", base_url), "test-model".to_string());
    let result = client.generate("fix this", test_options()).await;

    assert_eq!(result.unwrap(), "ok");
    shutdown_tx.send(()).ok();
}
