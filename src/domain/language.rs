/// Languages the translation endpoints accept as targets, as
/// short code / display name pairs. Fixed at compile time.
pub const SUPPORTED_LANGUAGES: [(&str, &str); 15] = [
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("zh", "Chinese"),
    ("ar", "Arabic"),
    ("hi", "Hindi"),
    ("tr", "Turkish"),
    ("pl", "Polish"),
    ("nl", "Dutch"),
];

/// Display name for a language code, if the code is supported.
pub fn language_name(code: &str) -> Option<&'static str> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

pub fn is_supported_language(code: &str) -> bool {
    language_name(code).is_some()
}
