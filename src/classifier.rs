//! Boundary decisions for lines outside structural regions.

use std::fmt;

use crate::config::Flags;
use crate::structure::{LineVerdict, RegionKind, starts_with_footnote_marker};
use crate::utils::SourceLine;

/// Whether a blank line goes in front of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryDecision {
    /// Place a blank line before this line.
    Insert,
    /// Leave the line adjoining the previous one.
    Suppress,
}

impl fmt::Display for BoundaryDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryDecision::Insert => f.write_str("insert"),
            BoundaryDecision::Suppress => f.write_str("suppress"),
        }
    }
}

fn starts_with_ascii_letter(text: &str) -> bool {
    text.trim_start()
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
}

/// Decide whether the break before `line` becomes a paragraph boundary.
///
/// Every line break outside a structural region is a boundary unless a flag
/// exempts the line. Blank lines never get a boundary of their own.
pub fn classify(line: &SourceLine<'_>, verdict: &LineVerdict, flags: &Flags) -> BoundaryDecision {
    if line.is_blank() || verdict.structural {
        return BoundaryDecision::Suppress;
    }

    let content = line.content();

    if flags.ignore_alphabet && starts_with_ascii_letter(content) {
        log::trace!("Line {} starts with a letter", line.index() + 1);
        return BoundaryDecision::Suppress;
    }

    if flags.ignore_footnote
        && (verdict.region == RegionKind::FootnoteDefinition
            || starts_with_footnote_marker(content))
    {
        log::trace!("Line {} belongs to a footnote", line.index() + 1);
        return BoundaryDecision::Suppress;
    }

    BoundaryDecision::Insert
}

#[cfg(test)]
mod tests {
    use super::*;

    const FREE: LineVerdict = LineVerdict {
        structural: false,
        region: RegionKind::None,
    };

    fn flags(ignore_alphabet: bool, ignore_footnote: bool) -> Flags {
        Flags {
            ignore_alphabet,
            ignore_footnote,
        }
    }

    fn decide(text: &str, verdict: LineVerdict, flags: Flags) -> BoundaryDecision {
        classify(&SourceLine::new(1, text), &verdict, &flags)
    }

    #[test]
    fn prose_line_gets_a_boundary() {
        assert_eq!(
            decide("吾輩は猫である。\n", FREE, Flags::default()),
            BoundaryDecision::Insert
        );
    }

    #[test]
    fn structural_line_never_gets_a_boundary() {
        let verdict = LineVerdict {
            structural: true,
            region: RegionKind::CodeFence,
        };
        assert_eq!(
            decide("本文\n", verdict, Flags::default()),
            BoundaryDecision::Suppress
        );
    }

    #[test]
    fn blank_line_never_gets_a_boundary() {
        assert_eq!(
            decide("  \n", FREE, Flags::default()),
            BoundaryDecision::Suppress
        );
    }

    #[test]
    fn alphabet_exemption_follows_the_flag() {
        assert_eq!(
            decide("English text\n", FREE, flags(true, false)),
            BoundaryDecision::Suppress
        );
        assert_eq!(
            decide("English text\n", FREE, flags(false, false)),
            BoundaryDecision::Insert
        );
    }

    #[test]
    fn alphabet_exemption_skips_leading_whitespace() {
        assert_eq!(
            decide("\u{3000}Indented\n", FREE, flags(true, false)),
            BoundaryDecision::Suppress
        );
    }

    #[test]
    fn digits_and_fullwidth_letters_are_not_alphabet() {
        assert_eq!(
            decide("2024年\n", FREE, flags(true, false)),
            BoundaryDecision::Insert
        );
        assert_eq!(
            decide("Ａｂｃ\n", FREE, flags(true, false)),
            BoundaryDecision::Insert
        );
    }

    #[test]
    fn footnote_exemption_follows_the_flag() {
        assert_eq!(
            decide("[^1]: 注釈\n", FREE, flags(false, true)),
            BoundaryDecision::Suppress
        );
        assert_eq!(
            decide("[^1]: 注釈\n", FREE, flags(false, false)),
            BoundaryDecision::Insert
        );
    }

    #[test]
    fn footnote_continuation_is_exempt() {
        let verdict = LineVerdict {
            structural: false,
            region: RegionKind::FootnoteDefinition,
        };
        assert_eq!(
            decide("続き\n", verdict, flags(false, true)),
            BoundaryDecision::Suppress
        );
    }

    #[test]
    fn exemptions_are_independent() {
        assert_eq!(
            decide("[^a]: note\n", FREE, flags(true, false)),
            BoundaryDecision::Insert
        );
        assert_eq!(
            decide("Text\n", FREE, flags(false, true)),
            BoundaryDecision::Insert
        );
        assert_eq!(
            decide("Text\n", FREE, flags(true, true)),
            BoundaryDecision::Suppress
        );
    }
}
