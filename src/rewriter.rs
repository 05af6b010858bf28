//! The single forward pass that turns line breaks into paragraph breaks.

use std::fmt;

use crate::classifier::{BoundaryDecision, classify};
use crate::config::Flags;
use crate::escapes::{resolve, strip_trailing_escape};
use crate::structure::{self, LineVerdict, RegionKind, StructuralState};
use crate::utils::{SourceLine, split_lines_inclusive};

/// Everything decided about one input line.
struct LineStep<'a> {
    line: SourceLine<'a>,
    verdict: LineVerdict,
    decision: BoundaryDecision,
    escape_consumed: bool,
}

fn steps<'a>(input: &'a str, flags: &Flags) -> Vec<LineStep<'a>> {
    let mut state = StructuralState::new();
    let mut steps: Vec<LineStep<'a>> = Vec::new();

    for (index, raw) in split_lines_inclusive(input).into_iter().enumerate() {
        let line = SourceLine::new(index, raw);
        let (next_state, verdict) = structure::advance(state, &line);
        state = next_state;

        let classified = classify(&line, &verdict, flags);

        let (decision, escape_consumed) = match steps.last() {
            // The first line never gets a boundary, and neither does a line
            // next to a blank one.
            None => (BoundaryDecision::Suppress, false),
            Some(_) if line.is_blank() => (BoundaryDecision::Suppress, false),
            Some(previous) if previous.line.is_blank() => (BoundaryDecision::Suppress, false),
            Some(previous) => {
                let prose = (!previous.verdict.structural).then(|| previous.line.content());
                let resolution = resolve(prose, classified);
                (resolution.decision, resolution.escape_consumed)
            }
        };

        log::trace!(
            "Line {}: {} ({}{})",
            index + 1,
            decision,
            verdict.region,
            if escape_consumed { ", escaped" } else { "" }
        );

        steps.push(LineStep {
            line,
            verdict,
            decision,
            escape_consumed,
        });
    }

    if state.depth() > 0 {
        log::debug!(
            "Document ended with {} open region(s): {:?}",
            state.depth(),
            state.regions()
        );
    }

    steps
}

/// Insert blank lines at every paragraph boundary of `input`.
///
/// Lines are copied verbatim, keeping their own line endings; an inserted
/// blank line reuses the ending of the line above it. The only other change
/// is that an escaping backslash which joined two lines is dropped.
pub fn transform(input: &str, flags: &Flags) -> String {
    let steps = steps(input, flags);
    let mut out = String::with_capacity(input.len() + steps.len());
    let mut inserted = 0usize;

    for (i, step) in steps.iter().enumerate() {
        if step.decision == BoundaryDecision::Insert
            && let Some(previous) = i.checked_sub(1).and_then(|p| steps.get(p))
        {
            out.push_str(previous.line.newline());
            inserted += 1;
        }

        let escape_used = steps.get(i + 1).is_some_and(|next| next.escape_consumed);
        let content = step.line.content();
        if escape_used {
            out.push_str(strip_trailing_escape(content));
        } else {
            out.push_str(content);
        }
        out.push_str(step.line.newline());
    }

    log::debug!(
        "Inserted {} paragraph boundaries across {} lines",
        inserted,
        steps.len()
    );
    out
}

/// The decisions [`transform`] makes, line by line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineReport<'a> {
    /// 1-based line number in the input.
    pub line_number: usize,
    pub region: RegionKind,
    pub structural: bool,
    pub decision: BoundaryDecision,
    /// This line's break was joined by a backslash on the line above.
    pub escape_consumed: bool,
    pub text: &'a str,
}

impl fmt::Display for LineReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decision = if self.escape_consumed {
            "escaped".to_string()
        } else {
            self.decision.to_string()
        };
        write!(
            f,
            "{:>5}  {:<8}  {:<13}  {:<10}  {}",
            self.line_number,
            decision,
            self.region.as_str(),
            if self.structural { "structural" } else { "free" },
            self.text
        )
    }
}

/// Report, per input line, the region it belongs to and the boundary decision
/// taken before it.
pub fn explain<'a>(input: &'a str, flags: &Flags) -> Vec<LineReport<'a>> {
    steps(input, flags)
        .into_iter()
        .map(|step| LineReport {
            line_number: step.line.index() + 1,
            region: step.verdict.region,
            structural: step.verdict.structural,
            decision: step.decision,
            escape_consumed: step.escape_consumed,
            text: step.line.content(),
        })
        .collect()
}
