//! A two-pass, Oppen-style pretty-printing engine.
//!
//! Callers lower whatever syntax tree they have into a flat [`Token`] stream; this crate never
//! parses anything itself. Given that stream plus a [`Config`], [`Context::pretty_print`] computes
//! each token's lookahead length ([`length_scan::scan`]) and then makes a single forward pass
//! ([`printer::Printer`]) deciding where to break lines, matching the two-pass structure used by
//! production Oppen-algorithm printers (no backtracking, no re-rendering).

mod comment_printer;
mod comments;
mod config;
mod context;
mod error;
mod indent;
mod length_scan;
mod printer;
mod token;

pub use comments::{Comment, CommentKind};
pub use config::{Config, MarkdownReflowConfig};
pub use context::{Context, PrintResult};
pub use error::FormatError;
pub use indent::{Indent, IndentUnit};
pub use printer::ApplicationRange;
pub use token::{BreakKind, OpenStyle, StreamToken, Token, VerbatimBlock};
