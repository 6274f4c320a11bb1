//! Cleanup of free-text model replies: models like to wrap answers in
//! quotes or echo part of the instruction back before the payload.

/// Removes one pair of surrounding double quotes, and only when both the
/// leading and the trailing quote are present. A lone quote on either end
/// is left untouched.
pub fn strip_wrapping_quotes(text: &str) -> &str {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        &text[1..text.len() - 1]
    } else {
        text
    }
}

/// Removes an echoed instruction prefix from the start of a translation
/// reply. Matching is case-insensitive, only at the start of the string,
/// and at most the first matching prefix is removed, together with any
/// colon/whitespace immediately following it.
pub fn strip_reply_prefix(text: &str, target_language_name: &str) -> String {
    let named_prefix = format!("{}:", target_language_name);
    let prefixes = [
        "Translation:",
        "Translation in",
        named_prefix.as_str(),
        "Here is the translation:",
        "The translation is:",
    ];

    for prefix in prefixes {
        let Some(head) = text.get(..prefix.len()) else {
            continue;
        };
        if head.eq_ignore_ascii_case(prefix) {
            return text[prefix.len()..]
                .trim_start()
                .trim_start_matches(':')
                .trim()
                .to_string();
        }
    }

    text.to_string()
}
