//! Fenced code block delimiters.

use crate::utils::strip_leading_spaces;

/// An open code fence: the fence character and how many of them opened it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fence {
    pub fence_char: char,
    pub fence_len: usize,
}

/// Count leading `fence_char` characters, if the line starts with one.
pub(crate) fn get_fence_count(line: &str, fence_char: char) -> Option<usize> {
    let count = line.chars().take_while(|&c| c == fence_char).count();
    if count == 0 { None } else { Some(count) }
}

/// Try to recognize a fence opening (up to 3 spaces, then 3+ backticks or tildes).
pub(crate) fn try_parse_fence_open(content: &str) -> Option<Fence> {
    let trimmed = strip_leading_spaces(content);

    let (fence_char, fence_len) = if let Some(count) = get_fence_count(trimmed, '`') {
        ('`', count)
    } else if let Some(count) = get_fence_count(trimmed, '~') {
        ('~', count)
    } else {
        return None;
    };

    if fence_len < 3 {
        return None;
    }

    // Backtick info strings may not contain backticks (CommonMark), otherwise
    // ```inline``` code spans would open a fence.
    let info_string = &trimmed[fence_len..];
    if fence_char == '`' && info_string.contains('`') {
        return None;
    }

    log::debug!("Opening {}x{:?} code fence", fence_len, fence_char);
    Some(Fence {
        fence_char,
        fence_len,
    })
}

/// Whether `content` closes the given fence: same character, at least as
/// long, nothing but whitespace after it.
pub(crate) fn is_closing_fence(content: &str, fence: &Fence) -> bool {
    let trimmed = strip_leading_spaces(content);
    match get_fence_count(trimmed, fence.fence_char) {
        Some(count) if count >= fence.fence_len => {
            trimmed[count * fence.fence_char.len_utf8()..].trim().is_empty()
        }
        _ => false,
    }
}
