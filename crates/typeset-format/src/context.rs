//! Per-file printing context: configuration, source text, and the optional partial-region window.

use tracing::debug;
use typeset_core::{Diagnostic, LineIndex};

use crate::config::Config;
use crate::error::FormatError;
use crate::printer::{ApplicationRange, Printer};
use crate::token::StreamToken;

/// The result of one `pretty_print` call: the formatted text plus any diagnostics collected while
/// producing it.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintResult {
    pub output: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Owns everything needed to print one file's token stream. Built once per file and consumed by
/// [`Context::pretty_print`]; there is no reuse across files, since the `LineIndex` and
/// application range are both specific to a single source snapshot.
pub struct Context {
    config: Config,
    line_index: LineIndex,
    application_range: Option<ApplicationRange>,
}

impl Context {
    pub fn new(source: &str, config: Config) -> Self {
        Self {
            config,
            line_index: LineIndex::new(source),
            application_range: None,
        }
    }

    /// Restricts formatting to the given 1-based, inclusive line range. Tokens whose origin falls
    /// outside it are emitted from their `raw_text` unchanged.
    pub fn with_application_range(mut self, start_line: u32, end_line: u32) -> Result<Self, FormatError> {
        if start_line == 0 {
            return Err(FormatError::ZeroStartLine);
        }
        if start_line > end_line {
            return Err(FormatError::InvalidApplicationRange {
                start: start_line,
                end: end_line,
            });
        }
        self.application_range = Some(ApplicationRange { start_line, end_line });
        Ok(self)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs the two-pass algorithm (length scan, then print) over `tokens` and consumes this
    /// context.
    pub fn pretty_print(self, tokens: &[StreamToken]) -> PrintResult {
        debug!(tokens = tokens.len(), "pretty-printing token stream");
        let printer = Printer::new(&self.config, &self.line_index, self.application_range);
        let (output, diagnostics) = printer.print(tokens);
        PrintResult { output, diagnostics }
    }
}
