use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "danraku")]
#[command(author, version)]
#[command(about = "Turn line breaks in Japanese-style Markdown into paragraph breaks")]
#[command(
    long_about = "Danraku rewrites Markdown written one paragraph per line, as is common in \
    Japanese prose, so that every line becomes its own paragraph under CommonMark. Code fences, \
    lists, block quotes, tables, footnotes, attribute annotations and HTML blocks are left as they are."
)]
#[command(after_help = "\
EXAMPLES:

    # Transform a file to stdout
    danraku transform document.md

    # Transform from stdin
    cat document.md | danraku transform

    # Check whether a file would change
    danraku transform --check document.md

    # Rewrite in place
    danraku transform --write document.md

    # Show the decision taken for every line
    danraku explain document.md

CONFIGURATION:

Danraku looks for configuration files in this order:
  1. Explicit --config path
  2. danraku.toml or .danraku.toml in the input's directory and its parents
  3. ~/.config/danraku/config.toml (XDG)
  4. Built-in defaults

Example .danraku.toml:

    [danraku]
    ignore_alphabet = true
    ignore_footnote = false")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    #[arg(help = "Path to configuration file")]
    #[arg(
        long_help = "Path to a custom configuration file. If not specified, danraku will \
        search for .danraku.toml or danraku.toml in the input's directory and its parents, \
        then fall back to ~/.config/danraku/config.toml."
    )]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub flags: FlagArgs,
}

/// Command-line overrides for the configuration file.
#[derive(Args, Default)]
pub struct FlagArgs {
    /// Keep lines starting with an ASCII letter in the previous paragraph
    #[arg(long, global = true)]
    pub ignore_alphabet: bool,

    /// Keep footnote lines in the previous paragraph
    #[arg(long, global = true)]
    pub ignore_footnote: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Insert paragraph breaks into a Markdown document
    #[command(
        long_about = "Insert a blank line before every line that starts a new paragraph. \
        By default, outputs the result to stdout. Use --write to rewrite the file in place \
        or --check to verify that nothing would change."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Transform to stdout
    danraku transform document.md

    # Transform from stdin
    printf '一行目\\n二行目\\n' | danraku transform

    # Check (exit code 1 if the file would change)
    danraku transform --check document.md

    # Rewrite in place
    danraku transform --write document.md

RULES:

  - A blank line is inserted before each prose line that follows another prose line
  - Lines inside code, lists, block quotes, tables and HTML are never split
  - A trailing backslash joins a line with the next one and is removed
  - Line endings (LF or CRLF) are preserved")]
    Transform {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,

        /// Check if the file would change without modifying it
        #[arg(long, conflicts_with = "write")]
        #[arg(help = "Check if file is already transformed (exit code 1 if not)")]
        #[arg(
            long_help = "Report whether the transform would change the file. If it would, \
            displays a diff and exits with code 1. Otherwise exits with code 0."
        )]
        check: bool,

        /// Rewrite the file in place
        #[arg(long, requires = "file")]
        #[arg(help = "Rewrite the file in place")]
        write: bool,
    },
    /// Show the boundary decision for every line
    #[command(
        long_about = "Print one row per input line with its line number, the decision taken \
        before it (insert, suppress or escaped), the structural region it belongs to and the \
        line itself. Useful to see why a line was or was not split off."
    )]
    Explain {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,
    },
}
