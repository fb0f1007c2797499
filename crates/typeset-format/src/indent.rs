//! Indentation model: units of indentation and the accumulated stack the printer renders.

use serde::{Deserialize, Serialize};

/// A single run of indentation characters: either spaces or tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IndentUnit {
    Spaces(usize),
    Tabs(usize),
}

impl IndentUnit {
    /// Visual column width of this unit, given the configured tab width.
    pub fn width(&self, tab_width: usize) -> usize {
        match self {
            IndentUnit::Spaces(n) => *n,
            IndentUnit::Tabs(n) => n * tab_width,
        }
    }

    pub fn render(&self) -> String {
        match self {
            IndentUnit::Spaces(n) => " ".repeat(*n),
            IndentUnit::Tabs(n) => "\t".repeat(*n),
        }
    }
}

impl Default for IndentUnit {
    fn default() -> Self {
        IndentUnit::Spaces(2)
    }
}

/// The printer's accumulated indentation: an ordered sequence of [`IndentUnit`]s contributed by
/// fired `Break(Open, ..)` points and by persisted continuations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Indent(Vec<IndentUnit>);

impl Indent {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, unit: IndentUnit) {
        self.0.push(unit);
    }

    pub fn pop(&mut self) -> Option<IndentUnit> {
        self.0.pop()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Visual columns consumed by this indentation, given the configured tab width.
    pub fn width(&self, tab_width: usize) -> usize {
        self.0.iter().map(|unit| unit.width(tab_width)).sum()
    }

    /// The literal text that should be emitted at the start of a line with this indentation.
    pub fn render(&self) -> String {
        self.0.iter().map(IndentUnit::render).collect()
    }
}
