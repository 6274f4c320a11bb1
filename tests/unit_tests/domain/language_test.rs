use tolkera::domain::{SUPPORTED_LANGUAGES, is_supported_language, language_name};

#[test]
fn given_registry_when_counting_then_has_exactly_fifteen_languages() {
    assert_eq!(SUPPORTED_LANGUAGES.len(), 15);
}

#[test]
fn given_known_codes_when_looking_up_then_returns_display_names() {
    assert_eq!(language_name("en"), Some("English"));
    assert_eq!(language_name("es"), Some("Spanish"));
    assert_eq!(language_name("zh"), Some("Chinese"));
    assert_eq!(language_name("nl"), Some("Dutch"));
}

#[test]
fn given_unknown_code_when_looking_up_then_returns_none() {
    assert_eq!(language_name("xx"), None);
    assert_eq!(language_name(""), None);
    assert_eq!(language_name("EN"), None);
}

#[test]
fn given_registry_when_checking_support_then_matches_lookup() {
    assert!(is_supported_language("de"));
    assert!(!is_supported_language("klingon"));
}

#[test]
fn given_registry_when_scanning_then_codes_are_unique() {
    for (i, (code, _)) in SUPPORTED_LANGUAGES.iter().enumerate() {
        for (other, _) in SUPPORTED_LANGUAGES.iter().skip(i + 1) {
            assert_ne!(code, other);
        }
    }
}
