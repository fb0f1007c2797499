//! Renders a classified [`Comment`] into the literal text the printer writes.

use crate::comments::{Comment, CommentKind};
use crate::config::Config;
use pulldown_cmark::{Event, Parser, Tag};
use textwrap::Options;

/// Renders `comment` as it should appear starting at `indent_text` (the effective indentation of
/// the line the comment begins on). Continuation lines are joined with `"\n"` plus `indent_text`;
/// the caller is responsible for the newline that follows the whole block.
pub fn render(comment: &Comment, indent_text: &str, current_indent_width: usize, cfg: &Config) -> String {
    match comment.kind {
        CommentKind::Line => render_line(comment, indent_text, "// "),
        CommentKind::DocLine => {
            if cfg.markdown_reflow.enabled {
                render_doc_line_reflowed(comment, indent_text, current_indent_width, cfg)
            } else {
                render_line(comment, indent_text, "/// ")
            }
        }
        CommentKind::Block => render_block(comment, indent_text, "/* ", "/**"),
        CommentKind::DocBlock => render_doc_block(comment, indent_text),
    }
}

fn render_line(comment: &Comment, indent_text: &str, prefix: &str) -> String {
    comment
        .lines
        .iter()
        .map(|line| format!("{prefix}{}", line.trim_end()))
        .collect::<Vec<_>>()
        .join(&format!("\n{indent_text}"))
}

fn render_doc_line_reflowed(
    comment: &Comment,
    indent_text: &str,
    current_indent_width: usize,
    cfg: &Config,
) -> String {
    const DOC_LINE_PREFIX_WIDTH: usize = "/// ".len();
    let body = comment.lines.join("\n");
    let width = cfg
        .line_length
        .saturating_sub(current_indent_width)
        .saturating_sub(DOC_LINE_PREFIX_WIDTH)
        .max(1);
    let reflowed = reflow_markdown(&body, width);
    reflowed
        .lines()
        .map(|line| format!("/// {}", line.trim_end()))
        .collect::<Vec<_>>()
        .join(&format!("\n{indent_text}"))
}

fn render_block(comment: &Comment, indent_text: &str, _open: &str, _doc_open: &str) -> String {
    if comment.lines.len() <= 1 {
        let body = comment.lines.first().map(String::as_str).unwrap_or("");
        return format!("/* {body} */");
    }
    let indent = common_indent(&comment.lines[1..]);
    let mut out = String::from("/*");
    out.push_str(&comment.lines[0]);
    for line in &comment.lines[1..] {
        out.push('\n');
        out.push_str(indent_text);
        out.push_str(trim_indent(line, indent).trim_end());
    }
    out.push_str("\n");
    out.push_str(indent_text);
    out.push_str("*/");
    out
}

fn render_doc_block(comment: &Comment, indent_text: &str) -> String {
    if comment.lines.len() <= 1 {
        let body = comment.lines.first().map(String::as_str).unwrap_or("");
        return format!("/** {body} */");
    }
    let indent = common_indent(&comment.lines[1..]);
    let mut out = String::from("/**");
    out.push_str(&comment.lines[0]);
    for line in &comment.lines[1..] {
        out.push('\n');
        out.push_str(indent_text);
        let trimmed = trim_indent(line, indent);
        let normalized = trimmed.strip_prefix('*').unwrap_or(trimmed);
        out.push(' ');
        out.push('*');
        out.push_str(normalized.trim_end());
    }
    out.push('\n');
    out.push_str(indent_text);
    out.push_str(" */");
    out
}

/// Number of leading ASCII-space columns shared by every non-empty line.
fn common_indent(lines: &[String]) -> usize {
    lines
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.len() - l.trim_start_matches(' ').len())
        .min()
        .unwrap_or(0)
}

fn trim_indent(line: &str, indent: usize) -> &str {
    let mut count = 0;
    let mut chars = line.char_indices();
    let byte_idx = loop {
        match chars.next() {
            Some((idx, ' ')) if count < indent => {
                count += 1;
                let _ = idx;
            }
            Some((idx, _)) => break idx,
            None => break line.len(),
        }
    };
    &line[byte_idx..]
}

/// Reformats a Markdown doc-comment body to `width` columns, normalising any typographic quotes
/// the reflow introduces back to plain ASCII.
fn reflow_markdown(body: &str, width: usize) -> String {
    let parser = Parser::new(body);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_paragraph = false;
    let mut in_code_block = false;

    for event in parser {
        match event {
            Event::Start(Tag::Paragraph) => {
                in_paragraph = true;
                current.clear();
            }
            Event::End(Tag::Paragraph) => {
                in_paragraph = false;
                paragraphs.push(current.clone());
                current.clear();
            }
            Event::Start(Tag::CodeBlock(_)) => in_code_block = true,
            Event::End(Tag::CodeBlock(_)) => in_code_block = false,
            Event::Text(text) | Event::Code(text) => {
                if in_paragraph && !in_code_block {
                    if !current.is_empty() {
                        current.push(' ');
                    }
                    current.push_str(&text);
                } else if !in_paragraph {
                    // Non-paragraph content (headings, lists, code blocks): pass through verbatim
                    // as its own "paragraph" so it is not reflowed.
                    paragraphs.push(text.to_string());
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if in_paragraph {
                    current.push(' ');
                }
            }
            _ => {}
        }
    }
    if in_paragraph && !current.is_empty() {
        paragraphs.push(current);
    }

    let opts = Options::new(width);
    let wrapped: Vec<String> = paragraphs
        .iter()
        .map(|p| textwrap::wrap(p, &opts).join("\n"))
        .collect();
    normalize_quotes(&wrapped.join("\n\n"))
}

fn normalize_quotes(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            other => other,
        })
        .collect()
}
