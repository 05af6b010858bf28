//! Indented code blocks.

use crate::utils::leading_indent;

/// Lines indented by four or more columns are code when they do not
/// continue a paragraph.
pub(crate) fn is_indented_code_line(content: &str) -> bool {
    leading_indent(content).0 >= 4 && !content.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_spaces_or_a_tab_is_code() {
        assert!(is_indented_code_line("    let x = 1;"));
        assert!(is_indented_code_line("\tlet x = 1;"));
    }

    #[test]
    fn shallow_indent_is_not_code() {
        assert!(!is_indented_code_line("   三つの空白"));
        assert!(!is_indented_code_line("\u{3000}全角空白"));
    }

    #[test]
    fn whitespace_only_line_is_not_code() {
        assert!(!is_indented_code_line("        "));
    }
}
