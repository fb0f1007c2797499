//! First pass: compute each token's lookahead length before the printer's single forward pass.
//!
//! This mirrors Oppen's original two-pass pretty-printing algorithm: rather than backtracking,
//! the printer needs to know, at each `Break`, whether the *upcoming* material up to the next
//! unresolved delimiter fits on the remaining line. The scanner computes that length for every
//! token in one backward-patched forward pass using an explicit stack of open delimiter indices.

use crate::token::{BreakKind, StreamToken, Token};

/// Length of each token once its enclosing group/break has been resolved.
///
/// A resolved `Open`/`Break` length is the width of everything up to its matching
/// `Close`/next break; an unresolved one (shouldn't happen after `scan` returns) is left negative
/// as a sentinel, matching Oppen's description of the value while it's still on the stack.
pub fn scan(tokens: &[StreamToken], max_line_length: usize) -> Vec<isize> {
    let mut lengths = vec![0isize; tokens.len()];
    let mut total: isize = 0;
    let mut stack: Vec<usize> = Vec::new();

    for (i, stream_token) in tokens.iter().enumerate() {
        match &stream_token.token {
            Token::Syntax(text) => {
                let w = text_width(text) as isize;
                lengths[i] = w;
                total += w;
            }
            Token::Space { size, .. } => {
                lengths[i] = *size as isize;
                total += *size as isize;
            }
            Token::Open(_) => {
                lengths[i] = -total;
                stack.push(i);
            }
            Token::Close => {
                lengths[i] = 0;
                // A trailing, still-unresolved `Break` immediately precedes the group's `Open` on
                // the stack whenever the group's last break point was never followed by another
                // break or newline; it closes together with the group.
                if let Some(&top_idx) = stack.last() {
                    if matches!(tokens[top_idx].token, Token::Break { .. }) {
                        stack.pop();
                        lengths[top_idx] += total;
                    }
                }
                let open_idx = stack
                    .pop()
                    .unwrap_or_else(|| panic!("unmatched Close at token {i}: no open delimiter on the stack"));
                lengths[open_idx] += total;
            }
            Token::Break { size, .. } => {
                if let Some(&top_idx) = stack.last() {
                    if matches!(tokens[top_idx].token, Token::Break { .. }) {
                        stack.pop();
                        lengths[top_idx] += total;
                    }
                }
                lengths[i] = -total;
                stack.push(i);
                total += *size as isize;
            }
            Token::Newlines { .. } => {
                if let Some(&top_idx) = stack.last() {
                    if matches!(tokens[top_idx].token, Token::Break { .. }) {
                        stack.pop();
                        lengths[top_idx] += total;
                    }
                }
                lengths[i] = max_line_length as isize;
                total += max_line_length as isize;
            }
            Token::Comment {
                comment,
                was_end_of_line,
            } => {
                lengths[i] = comment.length as isize;
                if !*was_end_of_line {
                    total += comment.length as isize;
                }
            }
            Token::Verbatim(block) => {
                let w = if block.is_multiline() {
                    max_line_length
                } else {
                    text_width(&block.text)
                };
                lengths[i] = w as isize;
                total += w as isize;
            }
        }
    }

    match stack.len() {
        0 => {}
        1 => {
            let idx = stack.pop().unwrap();
            match &tokens[idx].token {
                Token::Break { .. } => lengths[idx] += total,
                Token::Open(_) => panic!(
                    "unmatched Open at token {idx}: token stream ended with an unclosed group"
                ),
                other => unreachable!("unexpected token kind left on delimiter stack: {other:?}"),
            }
        }
        _ => panic!(
            "token stream ended with {} unresolved delimiters still open",
            stack.len()
        ),
    }

    lengths
}

/// ASCII fast path, falling back to a `char` count for the rare non-ASCII token.
pub(crate) fn text_width(text: &str) -> usize {
    if text.is_ascii() {
        text.len()
    } else {
        text.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comments::{Comment, CommentKind};
    use crate::token::OpenStyle;
    use pretty_assertions::assert_eq;

    fn syntax(s: &str) -> StreamToken {
        StreamToken::new(Token::Syntax(s.to_string()))
    }

    fn open(style: OpenStyle) -> StreamToken {
        StreamToken::new(Token::Open(style))
    }

    fn close() -> StreamToken {
        StreamToken::new(Token::Close)
    }

    fn brk(kind: BreakKind, size: usize) -> StreamToken {
        StreamToken::new(Token::Break {
            kind,
            size,
            ignores_discretionary: false,
        })
    }

    #[test]
    fn flat_group_length_is_its_full_width() {
        let tokens = vec![
            open(OpenStyle::Consistent),
            syntax("abc"),
            brk(BreakKind::Same, 1),
            syntax("def"),
            close(),
        ];
        let lengths = scan(&tokens, 80);
        // The Open's resolved length covers everything through the matching Close.
        assert_eq!(lengths[0], 3 + 1 + 3);
    }

    #[test]
    fn unresolved_trailing_break_is_resolved_against_remaining_total() {
        let tokens = vec![syntax("abc"), brk(BreakKind::Same, 1), syntax("def")];
        let lengths = scan(&tokens, 80);
        assert_eq!(lengths[1], 1 + 3);
    }

    #[test]
    #[should_panic(expected = "unmatched Open")]
    fn unmatched_open_panics() {
        let tokens = vec![open(OpenStyle::Consistent), syntax("x")];
        let _ = scan(&tokens, 80);
    }

    #[test]
    fn comment_length_excludes_end_of_line_comments_from_total() {
        let tokens = vec![
            syntax("x"),
            StreamToken::new(Token::Comment {
                comment: Comment::new(CommentKind::Line, vec!["hi".into()]),
                was_end_of_line: true,
            }),
        ];
        let lengths = scan(&tokens, 80);
        assert_eq!(lengths[0], 1);
        assert_eq!(lengths[1], 3 + 2);
    }
}
