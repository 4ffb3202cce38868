//! Parsing of message placeholders captured by behavioural steps.
//!
//! Feature files quote messages so that commas and surrounding spaces are
//! explicit, e.g. `"disk full"` or `"a, b"`. These helpers strip that quoting
//! and return owned messages ready for an outcome factory.

const QUOTES: [char; 2] = ['"', '\''];

/// Removes surrounding whitespace and one pair of matching quotes.
fn strip_quotes(value: &str) -> &str {
    let trimmed = value.trim();
    QUOTES
        .iter()
        .find_map(|quote| {
            trimmed
                .strip_prefix(*quote)
                .and_then(|rest| rest.strip_suffix(*quote))
        })
        .unwrap_or(trimmed)
}

/// Parses a single quoted message, keeping inner commas intact.
#[must_use]
pub fn message(value: &str) -> String {
    strip_quotes(value).trim().to_owned()
}

/// Parses a quoted, comma-separated list of messages in order.
///
/// An empty placeholder yields no messages.
#[must_use]
pub fn message_list(value: &str) -> Vec<String> {
    let inner = strip_quotes(value);
    if inner.trim().is_empty() {
        return Vec::new();
    }
    inner.split(',').map(|part| part.trim().to_owned()).collect()
}
