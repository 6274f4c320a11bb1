use std::sync::Arc;

use tolkera::application::services::EnhancementService;
use tolkera::infrastructure::llm::MockGenerativeClient;

#[tokio::test]
async fn given_unavailable_service_when_enhancing_then_returns_text_unchanged() {
    let service = EnhancementService::new(
        Arc::new(MockGenerativeClient::returning("should never be used")),
        false,
    );

    assert_eq!(service.enhance("raw transcript").await, "raw transcript");
}

#[tokio::test]
async fn given_failing_call_when_enhancing_then_returns_text_unchanged() {
    let service = EnhancementService::new(Arc::new(MockGenerativeClient::failing()), true);

    assert_eq!(service.enhance("raw transcript").await, "raw transcript");
}

#[tokio::test]
async fn given_successful_call_when_enhancing_then_returns_trimmed_reply() {
    let service = EnhancementService::new(
        Arc::new(MockGenerativeClient::returning("  Raw transcript.  ")),
        true,
    );

    assert_eq!(service.enhance("raw transcript").await, "Raw transcript.");
}

#[tokio::test]
async fn given_quoted_reply_when_enhancing_then_strips_the_quote_pair() {
    let service = EnhancementService::new(
        Arc::new(MockGenerativeClient::returning("\"Raw transcript.\"")),
        true,
    );

    assert_eq!(service.enhance("raw transcript").await, "Raw transcript.");
}

#[tokio::test]
async fn given_reply_with_lone_quote_when_enhancing_then_keeps_the_quote() {
    let service = EnhancementService::new(
        Arc::new(MockGenerativeClient::returning("\"Raw transcript.")),
        true,
    );

    assert_eq!(service.enhance("raw transcript").await, "\"Raw transcript.");
}
