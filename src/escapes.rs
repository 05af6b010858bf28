//! Trailing backslash escapes that join a line with the next one.
//!
//! ```markdown
//! この行と\
//! この行は同じ段落になる。
//! ```

use crate::classifier::BoundaryDecision;

/// Outcome of applying an escape to a boundary decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub decision: BoundaryDecision,
    /// The previous line's trailing backslash was used up and must be
    /// removed from the output.
    pub escape_consumed: bool,
}

/// Whether the line ends with a backslash that is not itself escaped,
/// i.e. an odd number of trailing backslashes.
pub fn has_trailing_escape(content: &str) -> bool {
    let trailing = content.bytes().rev().take_while(|&b| b == b'\\').count();
    trailing % 2 == 1
}

/// Remove the escaping backslash, if any.
pub fn strip_trailing_escape(content: &str) -> &str {
    if has_trailing_escape(content) {
        &content[..content.len() - 1]
    } else {
        content
    }
}

/// Apply the escape on the previous line, if present.
///
/// `previous` is the content of the preceding line when that line is prose;
/// callers pass `None` when it is blank, structural, or absent, so code lines
/// never lose a backslash. The escape only ever affects the one line break
/// that follows it.
pub fn resolve(previous: Option<&str>, decision: BoundaryDecision) -> Resolution {
    match previous {
        Some(content) if has_trailing_escape(content) => Resolution {
            decision: BoundaryDecision::Suppress,
            escape_consumed: true,
        },
        _ => Resolution {
            decision,
            escape_consumed: false,
        },
    }
}
