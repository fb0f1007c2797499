//! User-facing configuration for the pretty-printing engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::indent::IndentUnit;

/// Markdown reflow options for `///`-doc-line comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownReflowConfig {
    /// When set, doc-line comment bodies are parsed as Markdown and rewrapped to the available
    /// width instead of being left as-is.
    pub enabled: bool,
}

impl Default for MarkdownReflowConfig {
    fn default() -> Self {
        Self { enabled: false }
    }
}

/// The engine's tunable knobs. Everything here is a pure value type so hosts can deserialize it
/// straight from their own project configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum preferred column width of a line.
    pub line_length: usize,
    /// Indentation unit pushed per opened scope.
    pub indentation: IndentUnit,
    /// Visual width of a tab, used only to size `space_remaining` against mixed indentation.
    pub tab_width: usize,
    /// Maximum number of consecutive blank lines the printer preserves from discretionary
    /// `Newlines` tokens.
    pub maximum_blank_lines: usize,
    /// When false, discretionary newlines are always collapsed to a single line break.
    pub respects_existing_line_breaks: bool,
    /// Consumed by token builders upstream of this crate; carried here only so a single
    /// configuration value can be threaded through a whole formatting pipeline.
    pub line_break_before_control_flow_keywords: bool,
    pub line_break_before_each_argument: bool,
    pub line_break_before_each_generic_requirement: bool,
    /// Named style rule toggles, opaque to the engine itself (consumed by token builders).
    pub rules: BTreeMap<String, bool>,
    pub markdown_reflow: MarkdownReflowConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            line_length: 100,
            indentation: IndentUnit::Spaces(4),
            tab_width: 8,
            maximum_blank_lines: 1,
            respects_existing_line_breaks: true,
            line_break_before_control_flow_keywords: false,
            line_break_before_each_argument: false,
            line_break_before_each_generic_requirement: false,
            rules: BTreeMap::new(),
            markdown_reflow: MarkdownReflowConfig::default(),
        }
    }
}
