//! Response formatter: raw agent text in, HTML fragment out.
//!
//! Each non-blank line becomes exactly one `<div>` block, in source order.
//! There is no state across lines and no I/O, so the formatter is safe to
//! call from any number of request handlers at once.

pub mod classify;
pub mod emphasis;
pub mod escape;
pub mod lines;

use agentchat_types::block::RenderedBlock;

pub use classify::classify_line;
pub use emphasis::embolden;
pub use escape::escape_html;
pub use lines::split_lines;

/// Classify every non-blank line of `raw`.
pub fn render_blocks(raw: &str) -> Vec<RenderedBlock> {
    split_lines(raw).map(classify_line).collect()
}

/// Join rendered blocks into the final fragment, one block per line.
pub fn join_blocks(blocks: &[RenderedBlock]) -> String {
    blocks
        .iter()
        .map(RenderedBlock::to_html)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format raw agent text as a newline-joined HTML fragment.
///
/// Never fails. Empty or blank input yields an empty string.
pub fn format_response(raw: &str) -> String {
    join_blocks(&render_blocks(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentchat_types::block::BlockKind;

    /// Strip the markup the formatter inserts, leaving only escaped text.
    fn without_inserted_markup(html: &str) -> String {
        let mut out = html.to_string();
        for class in ["response-header", "list-item", "sub-item"] {
            out = out.replace(&format!(r#"<div class="{class}">"#), "");
        }
        out.replace("</div>", "")
            .replace("<strong>", "")
            .replace("</strong>", "")
    }

    #[test]
    fn empty_input_yields_empty_string() {
        assert_eq!(format_response(""), "");
        assert_eq!(format_response("\n\n   \n"), "");
    }

    #[test]
    fn header_example() {
        assert_eq!(
            format_response("### Suggested Title"),
            r#"<div class="response-header">Suggested Title</div>"#
        );
    }

    #[test]
    fn numbered_example() {
        assert_eq!(
            format_response("1. Write an outline"),
            r#"<div class="list-item"><strong>Write an outline</strong></div>"#
        );
    }

    #[test]
    fn bullet_example() {
        assert_eq!(
            format_response("- cover background"),
            r#"<div class="sub-item">cover background</div>"#
        );
    }

    #[test]
    fn emphasis_example() {
        assert_eq!(
            format_response("This is **important** advice"),
            r#"<div class="list-item">This is <strong>important</strong> advice</div>"#
        );
    }

    #[test]
    fn blank_lines_produce_no_blocks() {
        assert_eq!(
            format_response("Line one\n\n\nLine two"),
            "<div class=\"sub-item\">Line one</div>\n<div class=\"sub-item\">Line two</div>"
        );
    }

    #[test]
    fn mixed_content_keeps_order() {
        let blocks = render_blocks("### Title\n1. First\n- detail\nPlain note");
        let kinds: Vec<_> = blocks.iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::Header,
                BlockKind::NumberedItem,
                BlockKind::Bullet,
                BlockKind::PlainLine,
            ]
        );
        let classes: Vec<_> = kinds.iter().map(|k| k.css_class()).collect();
        assert_eq!(
            classes,
            vec!["response-header", "list-item", "sub-item", "sub-item"]
        );
        assert_eq!(
            format_response("### Title\n1. First\n- detail\nPlain note"),
            [
                r#"<div class="response-header">Title</div>"#,
                r#"<div class="list-item"><strong>First</strong></div>"#,
                r#"<div class="sub-item">detail</div>"#,
                r#"<div class="sub-item">Plain note</div>"#,
            ]
            .join("\n")
        );
    }

    #[test]
    fn single_line_without_newline_is_one_block() {
        let blocks = render_blocks("just one line of text");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::PlainLine);
    }

    #[test]
    fn no_trailing_separator() {
        let html = format_response("a\nb\n");
        assert!(!html.ends_with('\n'));
        assert_eq!(html.lines().count(), 2);
    }

    #[test]
    fn block_count_matches_non_blank_lines() {
        let inputs = [
            "",
            "one",
            "one\ntwo",
            "\n\n### h\n\n- b\n  \n1. n\n**e**\np\n",
            "\r\n###\r\n- \r\n1.  \r\n**\r\n",
            "   leading\n\t\ttrailing\t\n",
        ];
        for input in inputs {
            let expected = input
                .split(['\n', '\r'])
                .filter(|l| !l.trim().is_empty())
                .count();
            assert_eq!(render_blocks(input).len(), expected, "input: {input:?}");
            let html = format_response(input);
            let produced = if html.is_empty() { 0 } else { html.split('\n').count() };
            assert_eq!(produced, expected, "input: {input:?}");
        }
    }

    #[test]
    fn no_raw_specials_outside_inserted_markup() {
        let hostile = [
            "<script>alert('x')</script>",
            "### <h1 onclick=\"evil()\">",
            "1. <b>bold</b> & 'quoted'",
            "- \"dash\" <i>",
            "**<img src=x onerror=alert(1)>** & **'**",
            "&amp; already escaped",
        ];
        for input in hostile {
            let text = without_inserted_markup(&format_response(input));
            for ch in ['<', '>', '"', '\''] {
                assert!(!text.contains(ch), "{ch} leaked from {input:?}: {text}");
            }
            // Every remaining ampersand starts an entity.
            for (idx, _) in text.match_indices('&') {
                let rest = &text[idx..];
                let end = rest.find(';').expect("entity terminated");
                assert!(end > 1, "bare ampersand in {text}");
            }
        }
    }

    #[test]
    fn symbol_only_lines_do_not_panic() {
        let html = format_response("###\n**\n- \n1.\n#\n****");
        assert_eq!(render_blocks("###\n**\n- \n1.\n#\n****").len(), 6);
        assert!(html.starts_with(r#"<div class="response-header"></div>"#));
    }
}
