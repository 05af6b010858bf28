//! Paragraph breaks for Japanese-style Markdown.
//!
//! Japanese prose is usually written one sentence or paragraph per line, with
//! no blank line in between. CommonMark folds such lines into one paragraph.
//! [`transform`] inserts a blank line before every line that should start a
//! paragraph of its own, and leaves code fences, lists, block quotes, tables,
//! footnotes, attribute annotations and HTML blocks alone.
//!
//! ```
//! let flags = danraku::ConfigBuilder::default()
//!     .ignore_alphabet(true)
//!     .build()
//!     .flags();
//!
//! let out = danraku::transform("吾輩は猫である。\n名前はまだ無い。\n", &flags);
//! assert_eq!(out, "吾輩は猫である。\n\n名前はまだ無い。\n");
//! ```

pub mod classifier;
pub mod config;
pub mod escapes;
pub mod rewriter;
pub mod structure;
mod utils;

pub use classifier::BoundaryDecision;
pub use config::{Config, ConfigBuilder, Flags};
pub use rewriter::{LineReport, explain, transform};
pub use utils::SourceLine;
