//! Structural context tracking.
//!
//! Lines are fed to [`advance`] in document order. Each call consumes the
//! current [`StructuralState`] and hands back the updated one together with a
//! [`LineVerdict`] telling whether the line sits inside (or opens) a region
//! that a paragraph boundary must never split.
//!
//! Regions form a stack, innermost last. Container regions (block quotes,
//! list items, footnote definitions) can nest; leaf regions (code, HTML,
//! tables, attribute annotations) only ever sit on top.

mod attributes;
mod blockquotes;
mod code_blocks;
mod footnotes;
mod headings;
mod html_blocks;
mod indented_code;
mod lists;
mod tables;

use std::fmt;

use crate::utils::{SourceLine, byte_index_at_column, is_blank_line, leading_indent};

pub use code_blocks::Fence;
pub use html_blocks::HtmlBlockType;

pub(crate) use footnotes::starts_with_footnote_marker;

use attributes::{AttributeLine, closes_attribute, try_parse_attribute_line};
use blockquotes::try_parse_blockquote_marker;
use code_blocks::{is_closing_fence, try_parse_fence_open};
use footnotes::try_parse_footnote_definition;
use headings::try_parse_setext_underline;
use html_blocks::{
    closes_on_open_line, is_closing_marker, try_parse_complete_tag_line, try_parse_html_block_start,
};
use indented_code::is_indented_code_line;
use lists::try_parse_list_item;
use tables::{is_delimiter_row, is_pipe_row};

/// The kind of region a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegionKind {
    #[default]
    None,
    /// Paragraph text that cannot take a boundary: a line indented like code
    /// directly below prose.
    Paragraph,
    /// Setext heading underline.
    Heading,
    CodeFence,
    IndentedCode,
    ListItem,
    BlockQuote,
    Table,
    FootnoteDefinition,
    HtmlBlock,
    AttributeAnnotation,
}

impl RegionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegionKind::None => "none",
            RegionKind::Paragraph => "paragraph",
            RegionKind::Heading => "heading",
            RegionKind::CodeFence => "code-fence",
            RegionKind::IndentedCode => "indented-code",
            RegionKind::ListItem => "list-item",
            RegionKind::BlockQuote => "block-quote",
            RegionKind::Table => "table",
            RegionKind::FootnoteDefinition => "footnote",
            RegionKind::HtmlBlock => "html-block",
            RegionKind::AttributeAnnotation => "attribute",
        }
    }
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An open region together with what it needs to decide when it ends.
#[derive(Debug, Clone, PartialEq)]
pub enum Region {
    BlockQuote,
    ListItem {
        /// Relative to the text left over by the enclosing containers.
        content_col: usize,
    },
    FootnoteDefinition,
    CodeFence(Fence),
    IndentedCode,
    Table,
    HtmlBlock(HtmlBlockType),
    AttributeAnnotation,
}

impl Region {
    pub fn kind(&self) -> RegionKind {
        match self {
            Region::BlockQuote => RegionKind::BlockQuote,
            Region::ListItem { .. } => RegionKind::ListItem,
            Region::FootnoteDefinition => RegionKind::FootnoteDefinition,
            Region::CodeFence(_) => RegionKind::CodeFence,
            Region::IndentedCode => RegionKind::IndentedCode,
            Region::Table => RegionKind::Table,
            Region::HtmlBlock(_) => RegionKind::HtmlBlock,
            Region::AttributeAnnotation => RegionKind::AttributeAnnotation,
        }
    }

    fn is_container(&self) -> bool {
        matches!(
            self,
            Region::BlockQuote | Region::ListItem { .. } | Region::FootnoteDefinition
        )
    }
}

/// Everything the tracker remembers between lines.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuralState {
    stack: Vec<Region>,
    /// The previous line was blank, or there is no previous line.
    after_blank: bool,
    /// The previous line was prose containing a `|`, i.e. a possible table header.
    prev_pipe_row: bool,
    /// The previous line was paragraph text, so the next one may be a lazy
    /// continuation or a setext underline.
    in_paragraph: bool,
}

impl Default for StructuralState {
    fn default() -> Self {
        Self::new()
    }
}

impl StructuralState {
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            after_blank: true,
            prev_pipe_row: false,
            in_paragraph: false,
        }
    }

    /// Open regions, outermost first.
    pub fn regions(&self) -> &[Region] {
        &self.stack
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn innermost_kind(&self) -> RegionKind {
        self.stack.last().map_or(RegionKind::None, Region::kind)
    }

    fn finish_line(&mut self, blank: bool, pipe_row: bool, paragraph: bool) {
        self.after_blank = blank;
        self.prev_pipe_row = pipe_row;
        self.in_paragraph = paragraph;
    }
}

/// Per-line answer from the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineVerdict {
    /// The line is inside, opens, or continues a region that must not
    /// receive a paragraph boundary before it.
    pub structural: bool,
    /// Innermost region the line belongs to.
    pub region: RegionKind,
}

impl LineVerdict {
    fn structural(region: RegionKind) -> Self {
        Self {
            structural: true,
            region,
        }
    }

    fn free(region: RegionKind) -> Self {
        Self {
            structural: false,
            region,
        }
    }
}

/// What an open leaf region does with the next line.
enum LeafStep {
    /// The line belongs to the region, which stays open.
    Continue,
    /// The line belongs to the region and closes it.
    Close,
    /// The region ended before this line.
    End,
}

fn leaf_step(leaf: &Region, rest: &str) -> LeafStep {
    let blank = is_blank_line(rest);
    match leaf {
        Region::CodeFence(fence) => {
            if is_closing_fence(rest, fence) {
                LeafStep::Close
            } else {
                LeafStep::Continue
            }
        }
        Region::HtmlBlock(block_type) => {
            if blank && block_type.ends_at_blank_line() {
                LeafStep::End
            } else if is_closing_marker(rest, block_type) {
                LeafStep::Close
            } else {
                LeafStep::Continue
            }
        }
        Region::AttributeAnnotation => {
            if closes_attribute(rest) {
                LeafStep::Close
            } else {
                LeafStep::Continue
            }
        }
        Region::IndentedCode => {
            if blank || is_indented_code_line(rest) {
                LeafStep::Continue
            } else {
                LeafStep::End
            }
        }
        Region::Table => {
            if !blank && is_pipe_row(rest) {
                LeafStep::Continue
            } else {
                LeafStep::End
            }
        }
        // Containers never reach here.
        Region::BlockQuote | Region::ListItem { .. } | Region::FootnoteDefinition => LeafStep::End,
    }
}

/// Whether `rest` would start a block of its own, which rules out lazy
/// continuation.
fn starts_block(rest: &str) -> bool {
    try_parse_blockquote_marker(rest).is_some()
        || try_parse_list_item(rest).is_some()
        || try_parse_fence_open(rest).is_some()
        || try_parse_html_block_start(rest).is_some()
        || try_parse_footnote_definition(rest).is_some()
        || try_parse_setext_underline(rest) == Some(2)
}

/// Feed the next line to the tracker.
pub fn advance(
    mut state: StructuralState,
    line: &SourceLine<'_>,
) -> (StructuralState, LineVerdict) {
    let content = line.content();
    let blank = is_blank_line(content);

    // Which open containers does this line continue?
    let mut rest = content;
    let mut matched = 0;
    for region in &state.stack {
        match region {
            Region::BlockQuote => match try_parse_blockquote_marker(rest) {
                Some(start) => rest = &rest[start..],
                None => break,
            },
            Region::ListItem { content_col, .. } => {
                if !is_blank_line(rest) {
                    if leading_indent(rest).0 < *content_col {
                        break;
                    }
                    rest = &rest[byte_index_at_column(rest, *content_col)..];
                }
            }
            Region::FootnoteDefinition => {
                if !is_blank_line(rest) {
                    if leading_indent(rest).0 < 4 {
                        break;
                    }
                    rest = &rest[byte_index_at_column(rest, 4)..];
                }
            }
            _ => break,
        }
        matched += 1;
    }

    let containers = state.stack.iter().take_while(|r| r.is_container()).count();

    if matched == containers
        && let Some(leaf) = state.stack.get(containers)
    {
        let kind = leaf.kind();
        match leaf_step(leaf, rest) {
            LeafStep::Continue => {
                log::trace!("Line {} continues {}", line.index() + 1, kind);
                state.finish_line(blank, false, false);
                return (state, LineVerdict::structural(kind));
            }
            LeafStep::Close => {
                log::debug!("Line {} closes {}", line.index() + 1, kind);
                state.stack.truncate(containers);
                state.finish_line(blank, false, false);
                return (state, LineVerdict::structural(kind));
            }
            LeafStep::End => {
                log::debug!("{} ended before line {}", kind, line.index() + 1);
            }
        }
    }

    // A footnote definition absorbs lazy continuation lines until a blank
    // line or the start of another block.
    if !blank
        && !state.after_blank
        && matched + 1 == state.stack.len()
        && matches!(state.stack.last(), Some(Region::FootnoteDefinition))
        && !starts_block(rest)
    {
        log::trace!("Line {} lazily continues a footnote", line.index() + 1);
        state.finish_line(false, false, true);
        return (state, LineVerdict::free(RegionKind::FootnoteDefinition));
    }

    // Paragraph text of the innermost open container, or top-level text,
    // carries on into this line unless something interrupts it.
    let paragraph_continues = state.in_paragraph && state.stack.len() == matched;

    if state.stack.len() > matched {
        log::debug!(
            "Line {} closes {} region(s)",
            line.index() + 1,
            state.stack.len() - matched
        );
        state.stack.truncate(matched);
    }

    if blank {
        let region = state.innermost_kind();
        state.finish_line(true, false, false);
        return (state, LineVerdict::free(region));
    }

    if paragraph_continues {
        if let Some(level) = try_parse_setext_underline(rest) {
            log::debug!("Line {} underlines a level {} heading", line.index() + 1, level);
            state.finish_line(false, false, false);
            return (state, LineVerdict::structural(RegionKind::Heading));
        }
        // Indented code cannot interrupt a paragraph.
        if is_indented_code_line(rest) {
            log::trace!("Line {} is an indented paragraph continuation", line.index() + 1);
            state.finish_line(false, false, true);
            return (state, LineVerdict::structural(RegionKind::Paragraph));
        }
    }

    let continued = matched > 0;
    let mut opened = false;

    // Container openers can stack on one line: "> - item".
    loop {
        if let Some(start) = try_parse_blockquote_marker(rest) {
            log::debug!("Line {} opens a block quote", line.index() + 1);
            state.stack.push(Region::BlockQuote);
            rest = &rest[start..];
            opened = true;
            continue;
        }
        if let Some(item) = try_parse_list_item(rest)
            && (opened || !paragraph_continues || item.can_interrupt_paragraph())
        {
            log::debug!("Line {} opens a list item", line.index() + 1);
            state.stack.push(Region::ListItem {
                content_col: item.content_col,
            });
            rest = &rest[item.content_start..];
            opened = true;
            continue;
        }
        break;
    }

    let interrupting = paragraph_continues && !opened;
    let mut leaf_opened = false;
    let mut region_override = None;

    if !is_blank_line(rest) {
        if state.stack.is_empty() && state.after_blank && is_indented_code_line(rest) {
            state.stack.push(Region::IndentedCode);
            leaf_opened = true;
        } else if let Some(fence) = try_parse_fence_open(rest) {
            state.stack.push(Region::CodeFence(fence));
            leaf_opened = true;
        } else if let Some(block_type) = try_parse_html_block_start(rest)
            .or_else(|| {
                if interrupting {
                    None
                } else {
                    try_parse_complete_tag_line(rest)
                }
            })
        {
            log::trace!("Line {} starts HTML {:?}", line.index() + 1, block_type);
            if closes_on_open_line(rest, &block_type) {
                region_override = Some(RegionKind::HtmlBlock);
            } else {
                state.stack.push(Region::HtmlBlock(block_type));
            }
            leaf_opened = true;
        } else if let Some(attribute) = try_parse_attribute_line(rest) {
            match attribute {
                AttributeLine::Complete => {
                    region_override = Some(RegionKind::AttributeAnnotation)
                }
                AttributeLine::Unclosed => state.stack.push(Region::AttributeAnnotation),
            }
            leaf_opened = true;
        } else if let Some((id, _)) = try_parse_footnote_definition(rest) {
            log::debug!("Line {} opens footnote [^{}]", line.index() + 1, id);
            state.stack.push(Region::FootnoteDefinition);
        } else if state.prev_pipe_row && !state.after_blank && is_delimiter_row(rest) {
            state.stack.push(Region::Table);
            leaf_opened = true;
        }
    }

    if leaf_opened {
        log::debug!(
            "Line {} opens {}",
            line.index() + 1,
            region_override.unwrap_or_else(|| state.innermost_kind())
        );
    }

    let region = region_override.unwrap_or_else(|| state.innermost_kind());
    let structural = continued || opened || leaf_opened;
    let pipe_row = !leaf_opened && is_pipe_row(rest);
    let paragraph = !leaf_opened && !is_blank_line(rest);
    state.finish_line(false, pipe_row, paragraph);

    log::trace!(
        "Line {}: region={} structural={}",
        line.index() + 1,
        region,
        structural
    );
    (state, LineVerdict { structural, region })
}
