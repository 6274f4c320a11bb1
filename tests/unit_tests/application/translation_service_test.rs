use std::sync::Arc;

use tolkera::application::services::TranslationService;
use tolkera::domain::SUPPORTED_LANGUAGES;
use tolkera::infrastructure::llm::MockGenerativeClient;

#[tokio::test]
async fn given_unavailable_service_when_translating_then_every_target_returns_text_unchanged() {
    let service = TranslationService::new(
        Arc::new(MockGenerativeClient::returning("should never be used")),
        false,
    );

    for (code, _) in SUPPORTED_LANGUAGES {
        assert_eq!(
            service.translate("hello world", code, "auto").await,
            "hello world",
            "identity fallback violated for target {}",
            code
        );
    }
}

#[tokio::test]
async fn given_failing_call_when_translating_then_returns_text_unchanged() {
    let service = TranslationService::new(Arc::new(MockGenerativeClient::failing()), true);

    assert_eq!(service.translate("hello", "es", "auto").await, "hello");
}

#[tokio::test]
async fn given_clean_reply_when_translating_then_returns_it_trimmed() {
    let service = TranslationService::new(
        Arc::new(MockGenerativeClient::returning("  Hola mundo  ")),
        true,
    );

    assert_eq!(
        service.translate("hello world", "es", "auto").await,
        "Hola mundo"
    );
}

#[tokio::test]
async fn given_quoted_reply_with_echoed_prefix_when_translating_then_cleans_both() {
    let service = TranslationService::new(
        Arc::new(MockGenerativeClient::returning("\"Spanish: Hola mundo\"")),
        true,
    );

    assert_eq!(
        service.translate("hello world", "es", "auto").await,
        "Hola mundo"
    );
}

#[tokio::test]
async fn given_reply_with_translation_prefix_when_translating_then_strips_it() {
    let service = TranslationService::new(
        Arc::new(MockGenerativeClient::returning("Translation: Hola mundo")),
        true,
    );

    assert_eq!(
        service.translate("hello world", "es", "auto").await,
        "Hola mundo"
    );
}

#[tokio::test]
async fn given_unmapped_target_code_when_translating_then_still_returns_reply() {
    // The service itself does not validate codes; the handler does. An
    // unmapped code only changes the prompt wording.
    let service =
        TranslationService::new(Arc::new(MockGenerativeClient::returning("Bonghjornu")), true);

    assert_eq!(service.translate("hello", "co", "auto").await, "Bonghjornu");
}
