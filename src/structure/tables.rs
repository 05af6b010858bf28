//! Pipe table rows.
//!
//! A table is only known once its delimiter row arrives, so the header row
//! is ordinary prose and the tracker opens the table on the delimiter.

use std::sync::LazyLock;

use regex::Regex;

use crate::utils::leading_indent;

static DELIMITER_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\|?\s*:?-+:?\s*(\|\s*:?-+:?\s*)*\|?\s*$").expect("delimiter row regex")
});

/// A row that could belong to a pipe table.
pub(crate) fn is_pipe_row(line: &str) -> bool {
    leading_indent(line).0 <= 3 && line.contains('|')
}

/// A delimiter row such as `| --- | :-: |` or `---|---`.
pub(crate) fn is_delimiter_row(line: &str) -> bool {
    let trimmed = line.trim();
    is_pipe_row(line) && DELIMITER_ROW.is_match(trimmed)
}
