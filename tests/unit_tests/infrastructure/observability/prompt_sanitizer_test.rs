use tolkera::infrastructure::observability::sanitize_prompt;

#[test]
fn given_empty_text_when_sanitizing_then_returns_empty_marker() {
    assert_eq!(sanitize_prompt(""), "[EMPTY]");
    assert_eq!(sanitize_prompt("   "), "[EMPTY]");
}

#[test]
fn given_short_text_when_sanitizing_then_returns_unchanged() {
    let text = "What is the weather today?";
    assert_eq!(sanitize_prompt(text), text);
}

#[test]
fn given_long_text_when_sanitizing_then_truncates_with_length() {
    let text = "a".repeat(150);
    let result = sanitize_prompt(&text);
    assert!(result.contains("... (150 chars total)"));
    assert!(result.starts_with(&"a".repeat(100)));
}

#[test]
fn given_long_multibyte_text_when_sanitizing_then_truncates_on_char_boundary() {
    let text = "ä".repeat(120);
    let result = sanitize_prompt(&text);
    assert!(result.contains("chars total)"));
    assert!(result.starts_with("ä"));
}

#[test]
fn given_bearer_token_when_sanitizing_then_redacts_token() {
    let text = "Authorization: Bearer sk-abc123xyz";
    let result = sanitize_prompt(text);
    assert!(result.contains("Bearer [REDACTED]"));
    assert!(!result.contains("sk-abc123xyz"));
}

#[test]
fn given_api_key_when_sanitizing_then_redacts_key() {
    let text = "Send request with api_key=secret123";
    let result = sanitize_prompt(text);
    assert!(result.contains("api_key=[REDACTED]"));
    assert!(!result.contains("secret123"));
}

#[test]
fn given_whitespace_padded_text_when_sanitizing_then_trims() {
    assert_eq!(sanitize_prompt("  Hello world  "), "Hello world");
}
