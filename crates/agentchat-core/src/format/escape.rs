//! HTML escaping for text that came from the agent.

use std::borrow::Cow;

/// Escape `&`, `<`, `>`, `"` and `'` so the text is inert inside element
/// content and quoted attributes.
///
/// Only call this on input-sourced text, and only once. Markup the formatter
/// inserts itself must never pass through here.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}
