//! Setext heading underlines.

/// Try to parse a setext underline (`===` or `---`), returns the heading
/// level (1 for `=`, 2 for `-`) if found.
///
/// Only meaningful directly below a paragraph line; elsewhere a `---` run is
/// a thematic break and `===` is plain text.
pub(crate) fn try_parse_setext_underline(content: &str) -> Option<usize> {
    let trimmed = content.trim_start_matches(' ');

    // Check leading spaces (max 3)
    if content.len() - trimmed.len() > 3 {
        return None;
    }

    let level = match trimmed.as_bytes().first()? {
        b'=' => 1,
        b'-' => 2,
        _ => return None,
    };

    // One unbroken run of the same character, then only trailing whitespace
    let marker = trimmed.as_bytes()[0];
    let run = trimmed.bytes().take_while(|&b| b == marker).count();
    if !trimmed[run..].bytes().all(|b| b == b' ' || b == b'\t') {
        return None;
    }

    Some(level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equals_and_dashes_give_levels() {
        assert_eq!(try_parse_setext_underline("==="), Some(1));
        assert_eq!(try_parse_setext_underline("-"), Some(2));
        assert_eq!(try_parse_setext_underline("   ----  \t"), Some(2));
    }

    #[test]
    fn rejects_broken_or_mixed_runs() {
        assert_eq!(try_parse_setext_underline("- - -"), None);
        assert_eq!(try_parse_setext_underline("=-="), None);
        assert_eq!(try_parse_setext_underline("--- 本文"), None);
        assert_eq!(try_parse_setext_underline("    ---"), None);
        assert_eq!(try_parse_setext_underline(""), None);
    }
}
