//! Inline `**bold**` substitution.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Shortest non-empty span between a pair of `**` markers.
static EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("emphasis pattern is valid"));

/// The two-character emphasis marker.
pub const MARKER: &str = "**";

/// Wrap every `**span**` in `<strong>` tags.
///
/// `escaped` must already be HTML-escaped. Pairing is leftmost,
/// non-overlapping and shortest, so `**a**b**c**` yields two bold spans. A
/// marker with no partner stays literal.
pub fn embolden(escaped: &str) -> Cow<'_, str> {
    EMPHASIS.replace_all(escaped, "<strong>${1}</strong>")
}
