//! Footnote definition and reference markers.
//!
//! ```markdown
//! [^id]: Footnote content.
//!     Indented continuation.
//! ```

use crate::utils::strip_leading_spaces;

/// Parse a `[^id]` label at the start of `text`. Returns the id and the byte
/// offset just past the closing bracket.
fn parse_footnote_label(text: &str) -> Option<(&str, usize)> {
    let rest = text.strip_prefix("[^")?;
    let close = rest.find(']')?;
    let id = &rest[..close];

    if id.is_empty() || id.chars().any(|c| c.is_whitespace() || c == '[') {
        return None;
    }

    Some((id, 2 + close + 1))
}

/// Try to parse the footnote definition marker `[^id]:` at the start of a
/// line (up to 3 spaces of indentation).
/// Returns the id and the byte offset where the definition text starts.
pub(crate) fn try_parse_footnote_definition(line: &str) -> Option<(&str, usize)> {
    let trimmed = strip_leading_spaces(line);
    let indent = line.len() - trimmed.len();

    let (id, label_end) = parse_footnote_label(trimmed)?;
    let after = trimmed[label_end..].strip_prefix(':')?;
    let spaces = after.len() - after.trim_start_matches([' ', '\t']).len();

    Some((id, indent + label_end + 1 + spaces))
}

/// Whether the line's first visible text is a footnote reference `[^id]` or
/// a footnote definition marker `[^id]:`.
pub(crate) fn starts_with_footnote_marker(line: &str) -> bool {
    parse_footnote_label(line.trim_start()).is_some()
}
