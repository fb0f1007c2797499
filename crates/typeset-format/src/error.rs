//! Recoverable errors surfaced by this crate's public API.
//!
//! Structural violations of the token stream itself (unmatched `Open`/`Close`, an unmatched
//! `Break(Close, ..)`) are programming errors in the token builder upstream, not user-facing
//! failures, and are reported by panicking with a descriptive message rather than through this
//! type — see the printer module.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("invalid application range: start line {start} is greater than end line {end}")]
    InvalidApplicationRange { start: u32, end: u32 },
    #[error("invalid application range: line numbers are one-based, but start line was 0")]
    ZeroStartLine,
}
