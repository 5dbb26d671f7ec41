//! Small shared helpers for cell content.

use serde_json::Value;

/// Display form of a raw model value. Strings pass through unquoted,
/// anything else renders as its JSON text.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

const URL_SCHEMES: [&str; 4] = ["http://", "https://", "ftp://", "file://"];

/// Whether `text` looks like a URL the grid should present as a link.
pub fn is_url(text: &str) -> bool {
    let text = text.trim();
    if text.contains(char::is_whitespace) {
        return false;
    }
    URL_SCHEMES.iter().any(|scheme| {
        text.len() > scheme.len()
            && text
                .get(..scheme.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}
