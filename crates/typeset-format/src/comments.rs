//! Comment classification shared between the token stream and the comment printer.

/// The four comment shapes the printer treats differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    /// `// ...`
    Line,
    /// `/// ...`
    DocLine,
    /// `/* ... */`
    Block,
    /// `/** ... */`
    DocBlock,
}

impl CommentKind {
    pub fn is_doc(&self) -> bool {
        matches!(self, CommentKind::DocLine | CommentKind::DocBlock)
    }

    pub fn is_line(&self) -> bool {
        matches!(self, CommentKind::Line | CommentKind::DocLine)
    }
}

/// A single comment, already split into its logical text lines (delimiters stripped).
///
/// `lines` holds the comment body with the leading `//`, `///`, `/*`/`*/`, or `/**`/`*/` markers
/// removed; the comment printer re-applies the right prefix per [`CommentKind`] when rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub kind: CommentKind,
    pub lines: Vec<String>,
    /// Length of the comment as it would appear on a single line, used by the length scanner.
    pub length: usize,
}

impl Comment {
    pub fn new(kind: CommentKind, lines: Vec<String>) -> Self {
        let length = Self::compute_length(kind, &lines);
        Self {
            kind,
            lines,
            length,
        }
    }

    fn compute_length(kind: CommentKind, lines: &[String]) -> usize {
        let prefix_len = match kind {
            CommentKind::Line => 3,     // "// "
            CommentKind::DocLine => 4,  // "/// "
            CommentKind::Block => 3,    // "/* " ... " */" approximated per-line below
            CommentKind::DocBlock => 4, // "/** "
        };
        if lines.len() <= 1 {
            let body = lines.first().map(String::as_str).unwrap_or("");
            let delimiter_tax = match kind {
                CommentKind::Line | CommentKind::DocLine => 0,
                CommentKind::Block | CommentKind::DocBlock => 3, // trailing " */"
            };
            prefix_len + body.chars().count() + delimiter_tax
        } else {
            lines
                .iter()
                .map(|line| prefix_len + line.chars().count())
                .max()
                .unwrap_or(prefix_len)
        }
    }
}
