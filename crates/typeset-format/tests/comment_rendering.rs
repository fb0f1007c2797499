//! Exercises each `CommentKind` end to end through `Context::pretty_print`.

use pretty_assertions::assert_eq;
use typeset_format::{Comment, CommentKind, Config, Context, StreamToken, Token};

fn print_comment(comment: Comment, cfg: Config) -> String {
    let tokens = vec![StreamToken::new(Token::Comment {
        comment,
        was_end_of_line: false,
    })];
    Context::new("", cfg).pretty_print(&tokens).output
}

#[test]
fn line_comment_gets_its_prefix() {
    let out = print_comment(
        Comment::new(CommentKind::Line, vec!["a note".into()]),
        Config::default(),
    );
    assert_eq!(out, "// a note");
}

#[test]
fn doc_line_comment_gets_its_prefix_when_reflow_is_disabled() {
    let out = print_comment(
        Comment::new(CommentKind::DocLine, vec!["documents something".into()]),
        Config::default(),
    );
    assert_eq!(out, "/// documents something");
}

#[test]
fn multiline_block_comment_keeps_relative_indentation() {
    let comment = Comment::new(
        CommentKind::Block,
        vec![" summary".into(), "   detail one".into(), "   detail two".into()],
    );
    let out = print_comment(comment, Config::default());
    assert_eq!(out, "/* summary\ndetail one\ndetail two\n*/");
}

#[test]
fn multiline_doc_block_normalizes_star_prefixed_lines() {
    let comment = Comment::new(
        CommentKind::DocBlock,
        vec![" Summary.".into(), " * Detail one.".into(), " * Detail two.".into()],
    );
    let out = print_comment(comment, Config::default());
    assert_eq!(out, "/** Summary.\n * Detail one.\n * Detail two.\n */");
}

#[test]
fn doc_line_reflow_wraps_to_the_available_width_and_normalizes_quotes() {
    let mut cfg = Config {
        line_length: 20,
        ..Config::default()
    };
    cfg.markdown_reflow.enabled = true;
    let comment = Comment::new(
        CommentKind::DocLine,
        vec!["This is a fairly long sentence that will need to wrap across several lines.".into()],
    );
    let out = print_comment(comment, cfg);
    for line in out.lines() {
        assert!(line.starts_with("/// "));
        assert!(line.len() <= 20, "line too long: {line:?}");
    }
    assert!(!out.contains('\u{2018}') && !out.contains('\u{2019}'));
    assert!(!out.contains('\u{201C}') && !out.contains('\u{201D}'));
}
