//! Line splitting for raw agent text.

/// Characters that end a line.
///
/// Covers `\n`, `\r` (so `\r\n` too), vertical tab, form feed, the file,
/// group and record separators, NEL, and the Unicode line and paragraph
/// separators.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Split `raw` into trimmed, non-empty lines in source order.
///
/// A `\r\n` pair produces an empty piece between the two characters, which
/// is dropped along with every other blank line.
pub fn split_lines(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(LINE_BREAKS)
        .map(str::trim)
        .filter(|line| !line.is_empty())
}
