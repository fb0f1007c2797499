//! Shared text and diagnostic primitives used by the `typeset-format` pretty-printing engine.
//!
//! This crate is intentionally small and dependency-light: it holds only the types every
//! collaborator (token builder, printer, host driver) needs to agree on, namely byte-range
//! addressing into source text and a diagnostic shape for non-fatal style observations.

mod diagnostic;
mod text;

pub use diagnostic::{Diagnostic, Severity};
pub use text::{LineCol, LineIndex, SourceLocation};
pub use text_size::{TextRange, TextSize};
