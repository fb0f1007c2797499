//! Second pass: walk the token stream once, left to right, and emit the formatted text.
//!
//! This is the part of the algorithm that actually decides where lines break. It trusts the
//! lookahead lengths computed by [`crate::length_scan::scan`] to answer, at each `Break`, "does
//! the next chunk of material fit in what's left of this line" without ever backtracking.

use text_size::TextRange;
use typeset_core::{Diagnostic, LineIndex, Severity};

use crate::comment_printer;
use crate::config::Config;
use crate::indent::{Indent, IndentUnit};
use crate::length_scan;
use crate::token::{BreakKind, StreamToken, Token};

/// Bookkeeping for one still-open `Break(Open, ..)` that hasn't seen its matching
/// `Break(Close, ..)` yet.
struct ActiveOpenBreak {
    open_line: u32,
    did_indent: bool,
}

/// Range of 1-based source lines the printer should actually reformat; tokens whose origin falls
/// outside this window are emitted verbatim via their `raw_text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplicationRange {
    pub start_line: u32,
    pub end_line: u32,
}

impl ApplicationRange {
    pub fn contains(&self, line: u32) -> bool {
        line >= self.start_line && line <= self.end_line
    }
}

pub struct Printer<'a> {
    cfg: &'a Config,
    line_index: &'a LineIndex,
    application_range: Option<ApplicationRange>,

    out: String,
    line_number: u32,
    at_start_of_line: bool,
    consecutive_newline_count: usize,
    pending_spaces: usize,
    space_remaining: isize,

    indentation_stack: Indent,
    continuation_stack: Vec<bool>,
    active_open_breaks: Vec<ActiveOpenBreak>,
    force_break_stack: Vec<bool>,
    current_line_is_continuation: bool,
    last_break_kind: Option<BreakKind>,
    /// Whether the most recently processed break (or `Newlines`) actually fired a newline, as
    /// opposed to staying flat as spaces. Feeds the next `Open(Consistent)`'s force-break check.
    last_break: bool,

    diagnostics: Vec<Diagnostic>,
}

impl<'a> Printer<'a> {
    pub fn new(cfg: &'a Config, line_index: &'a LineIndex, application_range: Option<ApplicationRange>) -> Self {
        Self {
            cfg,
            line_index,
            application_range,
            out: String::new(),
            line_number: 1,
            at_start_of_line: true,
            consecutive_newline_count: 0,
            pending_spaces: 0,
            space_remaining: cfg.line_length as isize,
            indentation_stack: Indent::new(),
            continuation_stack: Vec::new(),
            active_open_breaks: Vec::new(),
            force_break_stack: Vec::new(),
            current_line_is_continuation: false,
            last_break_kind: None,
            last_break: false,
            diagnostics: Vec::new(),
        }
    }

    pub fn print(mut self, tokens: &[StreamToken]) -> (String, Vec<Diagnostic>) {
        let lengths = length_scan::scan(tokens, self.cfg.line_length);
        let origin_lines = self.precompute_origin_lines(tokens);

        for (i, stream_token) in tokens.iter().enumerate() {
            if let Some(range) = self.application_range {
                if !range.contains(origin_lines[i]) {
                    self.write_raw(&stream_token.raw_text);
                    continue;
                }
            }
            self.step(i, stream_token, lengths[i]);
        }

        assert!(
            self.active_open_breaks.is_empty(),
            "at least one Break(Open, ..) was not matched by a Break(Close, ..): {} still active",
            self.active_open_breaks.len()
        );
        assert!(
            self.continuation_stack.is_empty(),
            "continuation_stack not empty at end of stream: {} entries remain",
            self.continuation_stack.len()
        );

        (self.out, self.diagnostics)
    }

    /// Fills in the origin line for every token, inheriting the nearest preceding token's origin
    /// for synthesized tokens that have none of their own.
    fn precompute_origin_lines(&self, tokens: &[StreamToken]) -> Vec<u32> {
        let mut lines = Vec::with_capacity(tokens.len());
        let mut last = 1u32;
        for t in tokens {
            if let Some(offset) = t.origin_offset {
                last = self.line_index.line_number(TextRange::empty(offset));
            }
            lines.push(last);
        }
        lines
    }

    fn step(&mut self, i: usize, stream_token: &StreamToken, length: isize) {
        match &stream_token.token {
            Token::Syntax(text) => {
                self.write(text);
                self.last_break = false;
            }
            Token::Open(style) => {
                let breaks = match style {
                    crate::token::OpenStyle::Consistent => length > self.space_remaining || self.last_break,
                    crate::token::OpenStyle::Inconsistent => false,
                };
                self.force_break_stack.push(breaks);
            }
            Token::Close => {
                self.force_break_stack
                    .pop()
                    .unwrap_or_else(|| panic!("unmatched Close at token {i}: no open group on the stack"));
            }
            Token::Break {
                kind,
                size,
                ignores_discretionary: _,
            } => self.step_break(i, *kind, *size, length),
            Token::Space { size, .. } => {
                self.pending_spaces += size;
            }
            Token::Newlines { count, discretionary } => {
                self.current_line_is_continuation = self.last_break_kind == Some(BreakKind::Continue);
                self.write_newlines(*count, *discretionary);
                self.last_break = true;
            }
            Token::Comment {
                comment,
                was_end_of_line,
            } => {
                // Comments declare their own `length` for width bookkeeping (the single-line
                // width a multi-line rendering would have had), distinct from the actual
                // rendered text's width, so they bypass `write`'s own auto-deduction.
                let exceeds_remaining_width = *was_end_of_line && comment.length as isize > self.space_remaining;
                let indent_width = self.effective_indent_width();
                let indent_text = self.effective_indent_text();
                let rendered = comment_printer::render(comment, &indent_text, indent_width, self.cfg);
                self.write_text(&rendered);
                if exceeds_remaining_width {
                    let offset = stream_token.origin_offset.unwrap_or_default();
                    let location = self.line_index.source_location(offset);
                    self.diagnostics.push(Diagnostic::new(
                        Severity::Warning,
                        "end-of-line comment extends past the configured line length",
                        location,
                    ));
                } else {
                    self.space_remaining -= comment.length as isize;
                }
            }
            Token::Verbatim(block) => {
                let indent_text = self.effective_indent_text();
                let rendered = reindent_verbatim(&block.text, &indent_text);
                self.write_text(&rendered);
                self.consecutive_newline_count = 0;
                self.space_remaining -= length;
            }
        }
    }

    fn step_break(&mut self, i: usize, kind: BreakKind, size: usize, length: isize) {
        self.last_break_kind = Some(kind);
        let mut must_break = *self.force_break_stack.last().unwrap_or(&false);
        let is_continuation_if_fires;

        match kind {
            BreakKind::Open => {
                let same_line_as_last_open = self
                    .active_open_breaks
                    .last()
                    .is_some_and(|top| top.open_line == self.line_number);
                if same_line_as_last_open {
                    if let Some(top) = self.active_open_breaks.last_mut() {
                        top.did_indent = false;
                    }
                } else {
                    self.indentation_stack.push(self.cfg.indentation);
                    if self.current_line_is_continuation {
                        self.indentation_stack.push(self.cfg.indentation);
                    }
                }
                self.continuation_stack.push(self.current_line_is_continuation);
                self.active_open_breaks.push(ActiveOpenBreak {
                    open_line: self.line_number,
                    did_indent: true,
                });
                self.current_line_is_continuation = false;
                is_continuation_if_fires = false;
            }
            BreakKind::Close(close_must_break) => {
                let mo = self
                    .active_open_breaks
                    .pop()
                    .unwrap_or_else(|| panic!("unmatched Break(Close, ..) at token {i}: no active Break(Open, ..)"));
                if mo.did_indent {
                    let different_line = mo.open_line != self.line_number;
                    let no_more_actives = self.active_open_breaks.is_empty();
                    let outer_already_indented =
                        self.active_open_breaks.last().is_some_and(|o| o.did_indent);
                    if different_line || no_more_actives || outer_already_indented {
                        self.indentation_stack.pop();
                    } else if let Some(outer) = self.active_open_breaks.last_mut() {
                        outer.did_indent = true;
                    }
                }
                let was_continuation = self.continuation_stack.pop().unwrap_or(false);
                if was_continuation {
                    self.indentation_stack.pop();
                }
                if close_must_break {
                    must_break = mo.open_line != self.line_number;
                } else if self.space_remaining == 0 {
                    must_break = true;
                } else if mo.open_line != self.line_number {
                    self.current_line_is_continuation = mo.did_indent;
                }
                self.current_line_is_continuation = self.current_line_is_continuation || was_continuation;
                is_continuation_if_fires = was_continuation;
            }
            BreakKind::Continue => {
                is_continuation_if_fires = true;
            }
            BreakKind::Same => {
                // "No state change": whatever continuation state is already in effect carries
                // through whether or not this break fires.
                is_continuation_if_fires = self.current_line_is_continuation;
            }
            BreakKind::Reset => {
                must_break = self.current_line_is_continuation;
                is_continuation_if_fires = false;
            }
        }

        if length > self.space_remaining || must_break {
            self.write_newlines(1, false);
            self.current_line_is_continuation = is_continuation_if_fires;
            self.last_break = true;
        } else {
            self.pending_spaces += size;
            if self.at_start_of_line {
                self.current_line_is_continuation = is_continuation_if_fires;
            }
            self.last_break = false;
        }
    }

    fn effective_indent_width(&self) -> usize {
        let mut width = self.indentation_stack.width(self.cfg.tab_width);
        if self.current_line_is_continuation {
            width += self.cfg.indentation.width(self.cfg.tab_width);
        }
        width
    }

    fn effective_indent_text(&self) -> String {
        let mut text = self.indentation_stack.render();
        if self.current_line_is_continuation {
            text.push_str(&self.cfg.indentation.render());
        }
        text
    }

    /// Writes literal `Syntax` text: its own rendered width *is* its declared length, so this
    /// also performs the `space_remaining` deduction.
    fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.write_text(text);
        self.space_remaining -= length_scan::text_width(text) as isize;
    }

    /// Lazily renders the pending indentation/spaces (if any) and appends `text`, without
    /// touching `space_remaining`. Tokens with their own declared `length` (comments, verbatim
    /// blocks) use this directly and account for width themselves.
    fn write_text(&mut self, text: &str) {
        if self.at_start_of_line {
            let indent_text = self.effective_indent_text();
            let indent_width = self.effective_indent_width();
            self.out.push_str(&indent_text);
            self.space_remaining = self.cfg.line_length as isize - indent_width as isize;
            self.at_start_of_line = false;
        } else if self.pending_spaces > 0 {
            for _ in 0..self.pending_spaces {
                self.out.push(' ');
            }
            self.space_remaining -= self.pending_spaces as isize;
        }
        self.out.push_str(text);
        self.consecutive_newline_count = 0;
        self.pending_spaces = 0;
    }

    /// Writes `raw` exactly as given, bypassing all indentation/width bookkeeping. Used for
    /// tokens that fall outside the requested application range.
    fn write_raw(&mut self, raw: &str) {
        if raw.is_empty() {
            return;
        }
        self.out.push_str(raw);
        let newlines = raw.matches('\n').count() as u32;
        self.line_number += newlines;
        self.at_start_of_line = raw.ends_with('\n');
        self.pending_spaces = 0;
        if newlines > 0 {
            self.consecutive_newline_count = 0;
        }
    }

    fn write_newlines(&mut self, count: usize, discretionary: bool) {
        let cap = self.cfg.maximum_blank_lines + 1;
        let capped = count.min(if self.cfg.respects_existing_line_breaks { cap } else { 1 });
        let to_write = capped.saturating_sub(self.consecutive_newline_count);
        let should_write = to_write > 0 && (discretionary || self.consecutive_newline_count == 0);
        if !should_write {
            return;
        }
        for _ in 0..to_write {
            self.out.push('\n');
        }
        self.line_number += to_write as u32;
        self.at_start_of_line = true;
        self.consecutive_newline_count += to_write;
        self.pending_spaces = 0;
    }
}

fn reindent_verbatim(text: &str, indent_text: &str) -> String {
    text.split('\n').collect::<Vec<_>>().join(&format!("\n{indent_text}"))
}
