//! List item markers and content columns.

use crate::utils::leading_indent;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ListMarker {
    Bullet,
    Ordered { start: u64 },
}

/// A recognized list item opening.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ListItemStart {
    pub(crate) marker: ListMarker,
    /// Column where the item's content starts; continuation lines must be
    /// indented at least this far.
    pub(crate) content_col: usize,
    /// Byte offset of the item's content within the line.
    pub(crate) content_start: usize,
    /// Nothing follows the marker on this line.
    pub(crate) empty: bool,
}

impl ListItemStart {
    /// Only a non-empty bullet or an ordered item starting at 1 may interrupt
    /// a paragraph; anything else is continuation text of that paragraph.
    pub(crate) fn can_interrupt_paragraph(&self) -> bool {
        !self.empty
            && match self.marker {
                ListMarker::Bullet => true,
                ListMarker::Ordered { start } => start == 1,
            }
    }
}

fn tab_advance(col: usize) -> usize {
    col + (4 - (col % 4))
}

/// Thematic breaks (`* * *`, `- - -`, `___`) look like bullets but are not.
pub(crate) fn is_thematic_break(line: &str) -> bool {
    let trimmed = line.trim();
    let Some(first) = trimmed.chars().next() else {
        return false;
    };
    if !matches!(first, '*' | '-' | '_') {
        return false;
    }
    let count = trimmed.chars().filter(|&c| c == first).count();
    count >= 3 && trimmed.chars().all(|c| c == first || c == ' ' || c == '\t')
}

/// Returns (marker, marker byte length) if the text starts with a list marker
/// followed by whitespace or end of line.
fn parse_marker(text: &str) -> Option<(ListMarker, usize)> {
    let followed_by_space = |rest: &str| rest.is_empty() || rest.starts_with([' ', '\t']);

    if let Some(ch) = text.chars().next()
        && matches!(ch, '*' | '+' | '-')
        && followed_by_space(&text[1..])
    {
        return Some((ListMarker::Bullet, 1));
    }

    let digit_count = text.bytes().take_while(|b| b.is_ascii_digit()).count();
    if (1..=9).contains(&digit_count) {
        let delimiter = text[digit_count..].chars().next()?;
        if matches!(delimiter, '.' | ')') && followed_by_space(&text[digit_count + 1..]) {
            let start = text[..digit_count].parse().ok()?;
            return Some((ListMarker::Ordered { start }, digit_count + 1));
        }
    }

    None
}

/// Try to recognize a list item opening in `line`.
///
/// The marker may be indented by at most 3 columns. The content column
/// counts 1 to 4 spaces after the marker; 5 or more means the content is
/// indented code and only one space counts.
pub(crate) fn try_parse_list_item(line: &str) -> Option<ListItemStart> {
    let (indent_cols, indent_bytes) = leading_indent(line);
    if indent_cols > 3 {
        return None;
    }

    let text = &line[indent_bytes..];
    if is_thematic_break(text) {
        return None;
    }

    let (marker, marker_len) = parse_marker(text)?;

    let marker_end_col = indent_cols + marker_len;
    let after_marker = &text[marker_len..];

    let mut col = marker_end_col;
    let mut ws_bytes = 0;
    for b in after_marker.bytes() {
        match b {
            b' ' => col += 1,
            b'\t' => col = tab_advance(col),
            _ => break,
        }
        ws_bytes += 1;
    }

    let rest_is_blank = after_marker[ws_bytes..].trim().is_empty();
    let spacing = col - marker_end_col;
    let (content_col, content_start) = if rest_is_blank || spacing > 4 {
        // Empty item or indented code inside the item: content starts one
        // column after the marker.
        (marker_end_col + 1, indent_bytes + marker_len + ws_bytes.min(1))
    } else {
        (col, indent_bytes + marker_len + ws_bytes)
    };

    log::trace!("List marker {:?}, content column {}", marker, content_col);
    Some(ListItemStart {
        marker,
        content_col,
        content_start,
        empty: rest_is_blank,
    })
}
