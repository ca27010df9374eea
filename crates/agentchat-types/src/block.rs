//! Rendered block types produced by the response formatter.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification assigned to one non-empty line of agent output.
///
/// Exactly one kind per line. The formatter checks them in declaration order
/// and the first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// Line starting with `###`.
    Header,
    /// Line starting with `<digits>. `.
    NumberedItem,
    /// Line starting with `- `.
    Bullet,
    /// Line containing `**` somewhere.
    EmphasisLine,
    /// Anything else.
    PlainLine,
}

impl BlockKind {
    /// CSS class the chat page styles this kind with.
    pub fn css_class(self) -> &'static str {
        match self {
            BlockKind::Header => "response-header",
            BlockKind::NumberedItem | BlockKind::EmphasisLine => "list-item",
            BlockKind::Bullet | BlockKind::PlainLine => "sub-item",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BlockKind::Header => "header",
            BlockKind::NumberedItem => "numbered_item",
            BlockKind::Bullet => "bullet",
            BlockKind::EmphasisLine => "emphasis_line",
            BlockKind::PlainLine => "plain_line",
        };
        write!(f, "{s}")
    }
}

/// The HTML for a single source line.
///
/// `inner_html` is already escaped; only markup inserted by the formatter
/// (`<strong>`) appears unescaped inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedBlock {
    pub kind: BlockKind,
    pub inner_html: String,
}

impl RenderedBlock {
    pub fn new(kind: BlockKind, inner_html: impl Into<String>) -> Self {
        Self {
            kind,
            inner_html: inner_html.into(),
        }
    }

    /// Render as a `<div>` tagged with the kind's CSS class.
    pub fn to_html(&self) -> String {
        format!(
            r#"<div class="{}">{}</div>"#,
            self.kind.css_class(),
            self.inner_html
        )
    }
}

impl fmt::Display for RenderedBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}
