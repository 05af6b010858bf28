//! CLI integration tests for danraku.
//!
//! These tests execute the compiled binary and verify CLI behavior including:
//! - Subcommand behavior (transform, explain)
//! - Stdin/stdout handling
//! - Exit codes
//! - Config discovery and flag overrides

mod common;
mod explain;
mod transform;
