//! Per-line classification.
//!
//! Rules are checked in a fixed order and the first match wins:
//! header, numbered item, bullet, emphasis line, plain line. Swapping the
//! order changes the result for lines that match more than one rule (for
//! instance `1. **Bold** step` is a numbered item, not an emphasis line).

use std::sync::LazyLock;

use agentchat_types::block::{BlockKind, RenderedBlock};
use regex::Regex;

use super::emphasis::{self, embolden};
use super::escape::escape_html;

const HEADER_MARKER: &str = "###";
const BULLET_MARKER: &str = "- ";

/// `1. ` style prefix: digits, a period, at least one whitespace character.
static NUMBERED_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s+").expect("numbered prefix pattern is valid"));

/// Classify one line and render its inner HTML.
///
/// The line is trimmed first. Callers are expected to skip blank lines; a
/// blank line passed here falls through to an empty plain block.
pub fn classify_line(line: &str) -> RenderedBlock {
    let line = line.trim();

    if line.starts_with(HEADER_MARKER) {
        let title = line.trim_start_matches(['#', ' ']).trim();
        return RenderedBlock::new(BlockKind::Header, escape_html(title));
    }

    if let Some(prefix) = NUMBERED_PREFIX.find(line) {
        let content = escape_html(&line[prefix.end()..]);
        return RenderedBlock::new(
            BlockKind::NumberedItem,
            format!("<strong>{content}</strong>"),
        );
    }

    if let Some(rest) = line.strip_prefix(BULLET_MARKER) {
        return RenderedBlock::new(BlockKind::Bullet, escape_html(rest.trim()));
    }

    if line.contains(emphasis::MARKER) {
        let escaped = escape_html(line);
        return RenderedBlock::new(BlockKind::EmphasisLine, embolden(&escaped));
    }

    RenderedBlock::new(BlockKind::PlainLine, escape_html(line))
}
