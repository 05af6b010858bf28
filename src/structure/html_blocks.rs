//! HTML block start and end conditions.

use crate::utils::strip_leading_spaces;

/// HTML block-level tags as defined by CommonMark spec.
/// These tags start an HTML block when found at the start of a line.
const BLOCK_TAGS: &[&str] = &[
    "address",
    "article",
    "aside",
    "base",
    "basefont",
    "blockquote",
    "body",
    "caption",
    "center",
    "col",
    "colgroup",
    "dd",
    "details",
    "dialog",
    "dir",
    "div",
    "dl",
    "dt",
    "fieldset",
    "figcaption",
    "figure",
    "footer",
    "form",
    "frame",
    "frameset",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "head",
    "header",
    "hr",
    "html",
    "iframe",
    "legend",
    "li",
    "link",
    "main",
    "menu",
    "menuitem",
    "nav",
    "noframes",
    "ol",
    "optgroup",
    "option",
    "p",
    "param",
    "search",
    "section",
    "summary",
    "table",
    "tbody",
    "td",
    "tfoot",
    "th",
    "thead",
    "title",
    "tr",
    "track",
    "ul",
];

/// Tags that contain raw/verbatim content (no Markdown processing inside).
const VERBATIM_TAGS: &[&str] = &["script", "style", "pre", "textarea"];

/// Information about a detected HTML block opening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlBlockType {
    /// HTML comment: <!-- ... -->
    Comment,
    /// Processing instruction: <? ... ?>
    ProcessingInstruction,
    /// Declaration: <!...>
    Declaration,
    /// CDATA section: <![CDATA[ ... ]]>
    CData,
    /// Verbatim tag, closed by its end tag
    Verbatim { tag_name: String },
    /// Block-level tag, closed by a blank line
    BlockTag { tag_name: String },
    /// Any other complete tag alone on its line, closed by a blank line.
    /// Cannot interrupt a paragraph.
    CompleteTag { tag_name: String },
}

impl HtmlBlockType {
    /// Block-level tags end at the next blank line instead of an end marker.
    pub(crate) fn ends_at_blank_line(&self) -> bool {
        matches!(
            self,
            HtmlBlockType::BlockTag { .. } | HtmlBlockType::CompleteTag { .. }
        )
    }
}

/// Try to detect an HTML block opening from content.
pub(crate) fn try_parse_html_block_start(content: &str) -> Option<HtmlBlockType> {
    let trimmed = strip_leading_spaces(content);

    if !trimmed.starts_with('<') {
        return None;
    }

    if trimmed.starts_with("<!--") {
        return Some(HtmlBlockType::Comment);
    }

    if trimmed.starts_with("<?") {
        return Some(HtmlBlockType::ProcessingInstruction);
    }

    if trimmed.starts_with("<![CDATA[") {
        return Some(HtmlBlockType::CData);
    }

    if let Some(after_bang) = trimmed.strip_prefix("<!")
        && after_bang.chars().next()?.is_ascii_alphabetic()
    {
        return Some(HtmlBlockType::Declaration);
    }

    let tag_name = extract_tag_name(trimmed)?.to_lowercase();

    // Verbatim tags only open with a start tag.
    if VERBATIM_TAGS.contains(&tag_name.as_str()) && !trimmed.starts_with("</") {
        return Some(HtmlBlockType::Verbatim { tag_name });
    }

    if BLOCK_TAGS.contains(&tag_name.as_str()) {
        return Some(HtmlBlockType::BlockTag { tag_name });
    }

    None
}

/// Extract the tag name from an opening or closing tag. The name must be
/// followed by whitespace, `>`, `/>` or end of line.
fn extract_tag_name(text: &str) -> Option<&str> {
    let after_bracket = text.strip_prefix("</").or_else(|| text.strip_prefix('<'))?;

    let tag_end = after_bracket
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(after_bracket.len());

    if tag_end == 0 || !after_bracket.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return None;
    }

    let rest = &after_bracket[tag_end..];
    if rest.is_empty() || rest.starts_with([' ', '\t', '>']) || rest.starts_with("/>") {
        Some(&after_bracket[..tag_end])
    } else {
        None
    }
}

fn is_attribute_name_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || matches!(b, b'_' | b':')
}

fn is_attribute_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b':' | b'-')
}

fn skip_whitespace(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && matches!(bytes[pos], b' ' | b'\t') {
        pos += 1;
    }
    pos
}

/// Byte length of a complete open tag (`<name attr="v">`, `<name/>`) or
/// closing tag (`</name>`) at the start of `text`.
fn complete_tag_len(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let closing = text.starts_with("</");
    let mut pos = if closing { 2 } else { 1 };

    if !bytes.get(pos)?.is_ascii_alphabetic() {
        return None;
    }
    while pos < bytes.len() && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'-') {
        pos += 1;
    }

    if closing {
        pos = skip_whitespace(bytes, pos);
        return (bytes.get(pos) == Some(&b'>')).then_some(pos + 1);
    }

    loop {
        let after_ws = skip_whitespace(bytes, pos);
        match bytes.get(after_ws)? {
            b'>' => return Some(after_ws + 1),
            b'/' => return (bytes.get(after_ws + 1) == Some(&b'>')).then_some(after_ws + 2),
            &b if after_ws > pos && is_attribute_name_start(b) => {
                pos = after_ws + 1;
                while pos < bytes.len() && is_attribute_name_byte(bytes[pos]) {
                    pos += 1;
                }
                let before_eq = skip_whitespace(bytes, pos);
                if bytes.get(before_eq) != Some(&b'=') {
                    continue;
                }
                pos = skip_whitespace(bytes, before_eq + 1);
                match bytes.get(pos)? {
                    &quote @ (b'"' | b'\'') => {
                        let close = text[pos + 1..].find(quote as char)?;
                        pos += close + 2;
                    }
                    _ => {
                        let start = pos;
                        while pos < bytes.len()
                            && !bytes[pos].is_ascii_whitespace()
                            && !matches!(bytes[pos], b'"' | b'\'' | b'=' | b'<' | b'>' | b'`')
                        {
                            pos += 1;
                        }
                        if pos == start {
                            return None;
                        }
                    }
                }
            }
            _ => return None,
        }
    }
}

/// Detect an HTML block made of one complete tag followed only by
/// whitespace, such as `<ruby>` or `<my-element id="x">`.
pub(crate) fn try_parse_complete_tag_line(content: &str) -> Option<HtmlBlockType> {
    let trimmed = strip_leading_spaces(content);
    if !trimmed.starts_with('<') {
        return None;
    }

    let len = complete_tag_len(trimmed)?;
    if !trimmed[len..].trim().is_empty() {
        return None;
    }

    let name = trimmed.trim_start_matches(['<', '/']);
    let name_len = name
        .find(|c: char| !c.is_ascii_alphanumeric() && c != '-')
        .unwrap_or(name.len());
    let tag_name = name[..name_len].to_lowercase();
    if VERBATIM_TAGS.contains(&tag_name.as_str()) {
        return None;
    }
    Some(HtmlBlockType::CompleteTag { tag_name })
}

/// Check if a line contains the closing marker for the given HTML block type.
pub(crate) fn is_closing_marker(line: &str, block_type: &HtmlBlockType) -> bool {
    match block_type {
        HtmlBlockType::Comment => line.contains("-->"),
        HtmlBlockType::ProcessingInstruction => line.contains("?>"),
        HtmlBlockType::Declaration => line.contains('>'),
        HtmlBlockType::CData => line.contains("]]>"),
        HtmlBlockType::Verbatim { tag_name } => {
            let closing_tag = format!("</{}>", tag_name);
            line.to_lowercase().contains(&closing_tag)
        }
        HtmlBlockType::BlockTag { .. } | HtmlBlockType::CompleteTag { .. } => false,
    }
}

/// Whether an HTML block that starts on `line` also ends on it.
pub(crate) fn closes_on_open_line(line: &str, block_type: &HtmlBlockType) -> bool {
    match block_type {
        HtmlBlockType::Comment => line
            .find("<!--")
            .is_some_and(|start| line[start + 4..].contains("-->")),
        HtmlBlockType::ProcessingInstruction => line
            .find("<?")
            .is_some_and(|start| line[start + 2..].contains("?>")),
        _ => is_closing_marker(line, block_type),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_comment() {
        assert_eq!(
            try_parse_html_block_start("<!-- メモ"),
            Some(HtmlBlockType::Comment)
        );
    }

    #[test]
    fn detects_block_tags_case_insensitively() {
        assert_eq!(
            try_parse_html_block_start("<DIV class=\"x\">"),
            Some(HtmlBlockType::BlockTag {
                tag_name: "div".to_string()
            })
        );
        assert_eq!(
            try_parse_html_block_start("</section>"),
            Some(HtmlBlockType::BlockTag {
                tag_name: "section".to_string()
            })
        );
    }

    #[test]
    fn detects_verbatim_tags() {
        assert_eq!(
            try_parse_html_block_start("<pre>"),
            Some(HtmlBlockType::Verbatim {
                tag_name: "pre".to_string()
            })
        );
    }

    #[test]
    fn inline_tags_do_not_start_blocks() {
        assert_eq!(try_parse_html_block_start("<span>文</span>"), None);
        assert_eq!(try_parse_html_block_start("<br>"), None);
        assert_eq!(try_parse_html_block_start("<divider>"), None);
    }

    #[test]
    fn declaration_needs_a_letter() {
        assert_eq!(
            try_parse_html_block_start("<!DOCTYPE html>"),
            Some(HtmlBlockType::Declaration)
        );
        assert_eq!(try_parse_html_block_start("<!>"), None);
    }

    #[test]
    fn one_line_comment_closes_immediately() {
        let line = "<!-- 一行 -->";
        let kind = try_parse_html_block_start(line).unwrap();
        assert!(closes_on_open_line(line, &kind));
        assert!(!closes_on_open_line("<!-- 開始", &kind));
    }

    #[test]
    fn verbatim_block_closes_on_end_tag() {
        let kind = HtmlBlockType::Verbatim {
            tag_name: "script".to_string(),
        };
        assert!(!is_closing_marker("let a = 1;", &kind));
        assert!(is_closing_marker("</SCRIPT>", &kind));
    }

    #[test]
    fn block_tags_end_at_blank_lines() {
        let kind = HtmlBlockType::BlockTag {
            tag_name: "div".to_string(),
        };
        assert!(kind.ends_at_blank_line());
        assert!(!is_closing_marker("</div>", &kind));
    }

    #[test]
    fn complete_tag_alone_on_a_line() {
        assert_eq!(
            try_parse_complete_tag_line("<ruby>"),
            Some(HtmlBlockType::CompleteTag {
                tag_name: "ruby".to_string()
            })
        );
        assert_eq!(
            try_parse_complete_tag_line("</my-element>  "),
            Some(HtmlBlockType::CompleteTag {
                tag_name: "my-element".to_string()
            })
        );
        assert!(try_parse_complete_tag_line("<img src=\"a.png\" alt='猫' hidden/>").is_some());
        assert!(try_parse_complete_tag_line("<x-note data-id=3>").is_some());
    }

    #[test]
    fn complete_tag_needs_the_whole_line() {
        assert_eq!(try_parse_complete_tag_line("<ruby>漢字</ruby>"), None);
        assert_eq!(try_parse_complete_tag_line("<span"), None);
        assert_eq!(try_parse_complete_tag_line("<a href=>"), None);
        assert_eq!(try_parse_complete_tag_line("<pre>"), None);
        assert_eq!(try_parse_complete_tag_line("<3 好き>"), None);
    }
}
