//! Standalone attribute annotation lines: `{#id .class key=value}`
//!
//! An annotation on its own line attaches to the block right above it, so it
//! must never be pushed into a paragraph of its own.
//!
//! Rules:
//! - Surrounded by { } (an optional `:` may follow the opening brace)
//! - Identifier: #id
//! - Classes: .class (can have multiple)
//! - Key-value pairs: key=value, key="value" or key='value'
//! - Bare keys: ASCII names such as `hidden`

/// How a line relates to attribute annotation syntax.
#[derive(Debug, PartialEq)]
pub(crate) enum AttributeLine {
    /// The whole line is one `{...}` annotation.
    Complete,
    /// The line opens a brace that does not close on this line.
    Unclosed,
}

fn is_token_end(b: u8) -> bool {
    b.is_ascii_whitespace() || b == b'}'
}

fn skip_until(bytes: &[u8], mut pos: usize, stop: impl Fn(u8) -> bool) -> usize {
    while pos < bytes.len() && !stop(bytes[pos]) {
        pos += 1;
    }
    pos
}

/// Whether the text inside the braces is a well-formed attribute list.
fn is_attribute_content(content: &str) -> bool {
    let content = content.trim();
    let content = content.strip_prefix(':').unwrap_or(content).trim_start();
    if content.is_empty() {
        return false;
    }

    let bytes = content.as_bytes();
    let mut pos = 0;

    loop {
        pos = skip_until(bytes, pos, |b| !b.is_ascii_whitespace());
        if pos >= bytes.len() {
            return true;
        }

        match bytes[pos] {
            b'#' | b'.' => {
                let start = pos + 1;
                pos = skip_until(bytes, start, is_token_end);
                if pos == start {
                    return false;
                }
            }
            _ => {
                let key_start = pos;
                pos = skip_until(bytes, pos, |b| {
                    !(b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_'))
                });
                if pos == key_start {
                    // Not attribute syntax at all (e.g. prose in braces).
                    return false;
                }
                if pos >= bytes.len() || bytes[pos].is_ascii_whitespace() {
                    continue;
                }
                if bytes[pos] != b'=' {
                    return false;
                }
                pos += 1;

                if pos < bytes.len() && matches!(bytes[pos], b'"' | b'\'') {
                    let quote = bytes[pos];
                    pos = skip_until(bytes, pos + 1, |b| b == quote);
                    pos = (pos + 1).min(bytes.len());
                } else {
                    pos = skip_until(bytes, pos, is_token_end);
                }
            }
        }
    }
}

/// Classify a line as an attribute annotation, if it is one.
pub(crate) fn try_parse_attribute_line(line: &str) -> Option<AttributeLine> {
    let trimmed = line.trim();
    let body = trimmed.strip_prefix('{')?;

    match body.find('}') {
        Some(close) if close + 1 == body.len() => {
            if !is_attribute_content(&body[..close]) {
                return None;
            }
            log::trace!("Attribute annotation {}", trimmed);
            Some(AttributeLine::Complete)
        }
        Some(_) => None,
        None => {
            // Only treat it as an unterminated annotation when it starts like
            // one; `{` followed by prose stays prose.
            let start = body.trim_start();
            let first = start.bytes().next()?;
            if matches!(first, b'#' | b'.' | b':') || first.is_ascii_alphabetic() {
                Some(AttributeLine::Unclosed)
            } else {
                None
            }
        }
    }
}

/// Whether a line finishes a multi-line annotation.
pub(crate) fn closes_attribute(line: &str) -> bool {
    line.trim_end().ends_with('}')
}
