//! The token stream vocabulary the length scanner and printer operate over.
//!
//! A token stream is produced entirely by the caller (there is no parser in this crate): callers
//! lower whatever syntax tree they have into a flat `Vec<StreamToken>` and hand it to
//! [`crate::Context::pretty_print`].

use text_size::TextSize;

use crate::comments::Comment;

/// Whether a group breaks as a unit (`Consistent`) or lets individual break points decide for
/// themselves once the group doesn't fit flat (`Inconsistent`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenStyle {
    Consistent,
    Inconsistent,
}

/// The role a `Break` token plays when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakKind {
    /// Opens a new indentation scope when it fires.
    Open,
    /// Closes the scope opened by the most recent unmatched `Break(Open, ..)`.
    /// `true` forces the break to always fire, regardless of remaining width.
    Close(bool),
    /// Marks the line that follows (if this break fires) as a continuation of the current one.
    Continue,
    /// Fires or not purely on available width; carries no indentation bookkeeping of its own.
    Same,
    /// Fires exactly when the current line is already a continuation.
    Reset,
}

/// A pre-rendered block of text that is written as-is, without going through the group/break
/// machinery. Used for things like embedded raw strings that must not be reflowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbatimBlock {
    pub text: String,
}

impl VerbatimBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn is_multiline(&self) -> bool {
        self.text.contains('\n')
    }
}

/// One element of the flat token stream the printer consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Literal text written exactly as given (already escaped/quoted by the caller).
    Syntax(String),
    /// Opens a group; paired with a later [`Token::Close`].
    Open(OpenStyle),
    /// Closes the most recently opened, unmatched [`Token::Open`].
    Close,
    Break {
        kind: BreakKind,
        size: usize,
        ignores_discretionary: bool,
    },
    Space {
        size: usize,
        flexible: bool,
    },
    Newlines {
        count: usize,
        discretionary: bool,
    },
    Comment {
        comment: Comment,
        was_end_of_line: bool,
    },
    Verbatim(VerbatimBlock),
}

/// A [`Token`] paired with enough provenance to support partial-region formatting and
/// location-aware diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamToken {
    pub token: Token,
    /// Byte offset this token originates from in the source, if it corresponds to real source
    /// text. Synthesized tokens (e.g. an inserted `Break`) carry `None` and inherit the origin
    /// line of the nearest preceding token that has one.
    pub origin_offset: Option<TextSize>,
    /// The token's original textual form (including any leading/trailing trivia the caller wants
    /// preserved), used verbatim when the token falls outside the requested application range.
    pub raw_text: String,
}

impl StreamToken {
    pub fn new(token: Token) -> Self {
        Self {
            token,
            origin_offset: None,
            raw_text: String::new(),
        }
    }

    pub fn with_origin(mut self, offset: TextSize) -> Self {
        self.origin_offset = Some(offset);
        self
    }

    pub fn with_raw_text(mut self, raw_text: impl Into<String>) -> Self {
        self.raw_text = raw_text.into();
        self
    }
}
