//! Block quote markers.

/// Check if line starts with a blockquote marker (up to 3 spaces + >).
/// Returns the byte offset where the quoted content starts.
pub(crate) fn try_parse_blockquote_marker(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    let mut i = 0;

    while i < bytes.len() && bytes[i] == b' ' && i < 3 {
        i += 1;
    }

    if i >= bytes.len() || bytes[i] != b'>' {
        return None;
    }
    let marker_end = i + 1;

    // Optional space after >
    if marker_end < bytes.len() && bytes[marker_end] == b' ' {
        Some(marker_end + 1)
    } else {
        Some(marker_end)
    }
}
