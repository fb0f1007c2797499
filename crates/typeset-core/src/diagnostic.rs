//! Diagnostics emitted by the printer for non-fatal style observations.

use crate::SourceLocation;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// A single diagnostic produced while printing.
///
/// The engine never raises on these: they are collected and handed to the host's sink (see
/// `typeset_format::Context::diagnostics`) without affecting control flow.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub location: SourceLocation,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            severity,
            message: message.into(),
            location,
        }
    }
}
