//! Line-level helpers shared by the tracker, classifier and rewriter.

/// One line of the input document together with its 0-based index.
///
/// The raw slice keeps its line ending (`\n`, `\r\n`, or nothing for a final
/// unterminated line) so the rewriter can emit it back byte-for-byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    index: usize,
    raw: &'a str,
}

impl<'a> SourceLine<'a> {
    pub fn new(index: usize, raw: &'a str) -> Self {
        Self { index, raw }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The line including its line ending.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// The line without its line ending.
    pub fn content(&self) -> &'a str {
        strip_newline(self.raw).0
    }

    /// The line ending (`"\n"`, `"\r\n"` or `""`).
    pub fn newline(&self) -> &'a str {
        strip_newline(self.raw).1
    }

    /// Blank in the CommonMark sense: only spaces and tabs.
    pub fn is_blank(&self) -> bool {
        is_blank_line(self.content())
    }
}

pub(crate) fn is_blank_line(line: &str) -> bool {
    line.bytes().all(|b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'))
}

/// Strip trailing newline (LF or CRLF) from a line, returning the content and the newline string.
pub(crate) fn strip_newline(line: &str) -> (&str, &str) {
    if let Some(content) = line.strip_suffix("\r\n") {
        (content, "\r\n")
    } else if let Some(content) = line.strip_suffix('\n') {
        (content, "\n")
    } else {
        (line, "")
    }
}

/// Split input into lines while preserving line endings (LF or CRLF).
pub(crate) fn split_lines_inclusive(input: &str) -> Vec<&str> {
    if input.is_empty() {
        return vec![];
    }

    let mut lines = Vec::new();
    let mut start = 0;

    // A CRLF always ends in LF, so splitting on LF keeps the CR with its line.
    for (i, b) in input.bytes().enumerate() {
        if b == b'\n' {
            lines.push(&input[start..=i]);
            start = i + 1;
        }
    }

    if start < input.len() {
        lines.push(&input[start..]);
    }

    lines
}

/// Expand tabs to columns (tab stop = 4) and return (cols, byte_offset).
pub(crate) fn leading_indent(line: &str) -> (usize, usize) {
    let mut cols = 0usize;
    let mut bytes = 0usize;
    for b in line.bytes() {
        match b {
            b' ' => {
                cols += 1;
                bytes += 1;
            }
            b'\t' => {
                cols += 4 - (cols % 4);
                bytes += 1;
            }
            _ => break,
        }
    }
    (cols, bytes)
}

/// Return byte index at a given column (tabs = 4).
pub(crate) fn byte_index_at_column(line: &str, target_col: usize) -> usize {
    let mut col = 0usize;
    let mut idx = 0usize;
    for (i, b) in line.bytes().enumerate() {
        if col >= target_col {
            return idx;
        }
        match b {
            b' ' => {
                col += 1;
                idx = i + 1;
            }
            b'\t' => {
                col += 4 - (col % 4);
                idx = i + 1;
            }
            _ => break,
        }
    }
    idx
}

/// Strip up to 3 leading spaces from a line.
pub(crate) fn strip_leading_spaces(line: &str) -> &str {
    line.strip_prefix("   ")
        .or_else(|| line.strip_prefix("  "))
        .or_else(|| line.strip_prefix(" "))
        .unwrap_or(line)
}
