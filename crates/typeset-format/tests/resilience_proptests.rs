//! Property tests asserting the printer's structural invariants hold for arbitrary well-formed
//! token streams, independent of any particular worked scenario.

use proptest::prelude::*;
use typeset_format::{
    BreakKind, Comment, CommentKind, Config, Context, OpenStyle, StreamToken, Token, VerbatimBlock,
};

const PROPTEST_CASES: u32 = 256;

/// A leaf token that carries no grouping/break bookkeeping of its own: plain text, a comment of
/// some kind, or a pre-rendered verbatim block.
fn arb_leaf() -> impl Strategy<Value = StreamToken> {
    prop_oneof![
        "[a-z]{1,6}".prop_map(|s| StreamToken::new(Token::Syntax(s))),
        "[a-z ]{1,12}".prop_map(|s| {
            StreamToken::new(Token::Comment {
                comment: Comment::new(CommentKind::Line, vec![s]),
                was_end_of_line: false,
            })
        }),
        ("[a-z ]{1,12}", any::<bool>()).prop_map(|(s, doc)| {
            let kind = if doc { CommentKind::DocBlock } else { CommentKind::Block };
            StreamToken::new(Token::Comment {
                comment: Comment::new(kind, vec![s.clone(), s]),
                was_end_of_line: false,
            })
        }),
        "[a-z]{1,6}".prop_map(|s| StreamToken::new(Token::Verbatim(VerbatimBlock::new(s)))),
        prop::collection::vec("[a-z]{1,4}", 2..4)
            .prop_map(|lines| StreamToken::new(Token::Verbatim(VerbatimBlock::new(lines.join("\n"))))),
    ]
}

/// A separator emitted between sibling groups: a break of some kind (every `Break(Open, ..)`
/// generated here is immediately paired with a `Break(Close, ..)`, so `Continue`/`Same`/`Reset`
/// are the only separator kinds that appear bare) or a discretionary run of blank lines.
fn arb_separator() -> impl Strategy<Value = Vec<StreamToken>> {
    prop_oneof![
        Just(BreakKind::Same).prop_map(|kind| vec![StreamToken::new(Token::Break {
            kind,
            size: 1,
            ignores_discretionary: false,
        })]),
        Just(BreakKind::Continue).prop_map(|kind| vec![StreamToken::new(Token::Break {
            kind,
            size: 1,
            ignores_discretionary: false,
        })]),
        Just(BreakKind::Reset).prop_map(|kind| vec![StreamToken::new(Token::Break {
            kind,
            size: 1,
            ignores_discretionary: false,
        })]),
        (1usize..4, any::<bool>()).prop_map(|(count, discretionary)| {
            vec![StreamToken::new(Token::Newlines { count, discretionary })]
        }),
    ]
}

/// A balanced, arbitrary token tree. Every `Open`/`Close` pair is balanced by construction, and
/// every nested group additionally wraps its children in a matching `Break(Open, ..)`/
/// `Break(Close, ..)` pair (mirroring how a real token builder nests scope breaks inside scope
/// tokens), so the printer's indentation/continuation bookkeeping is exercised, not just the
/// length scanner's delimiter stack.
fn arb_tokens() -> impl Strategy<Value = Vec<StreamToken>> {
    fn build(depth: u32) -> BoxedStrategy<Vec<StreamToken>> {
        let leaf = arb_leaf().prop_map(|t| vec![t]);
        if depth == 0 {
            return leaf.boxed();
        }
        let recurse = (
            prop::collection::vec(build(depth - 1), 0..4),
            prop::collection::vec(arb_separator(), 0..4),
            prop_oneof![Just(OpenStyle::Consistent), Just(OpenStyle::Inconsistent)],
            any::<bool>(),
        )
            .prop_map(|(groups, separators, style, close_must_break)| {
                let mut out = vec![
                    StreamToken::new(Token::Open(style)),
                    StreamToken::new(Token::Break {
                        kind: BreakKind::Open,
                        size: 1,
                        ignores_discretionary: false,
                    }),
                ];
                for (i, group) in groups.into_iter().enumerate() {
                    if i > 0 {
                        if let Some(sep) = separators.get(i - 1) {
                            out.extend(sep.clone());
                        }
                    }
                    out.extend(group);
                }
                out.push(StreamToken::new(Token::Break {
                    kind: BreakKind::Close(close_must_break),
                    size: 0,
                    ignores_discretionary: false,
                }));
                out.push(StreamToken::new(Token::Close));
                out
            });
        prop_oneof![leaf, recurse].boxed()
    }
    build(3)
}

fn arb_config() -> impl Strategy<Value = Config> {
    (4usize..60, 1usize..4).prop_map(|(line_length, indent)| Config {
        line_length,
        indentation: typeset_format::IndentUnit::Spaces(indent),
        ..Config::default()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

    /// No output line may end in whitespace, at any line length or nesting.
    #[test]
    fn no_trailing_whitespace(tokens in arb_tokens(), cfg in arb_config()) {
        let result = Context::new("", cfg).pretty_print(&tokens);
        for line in result.output.lines() {
            prop_assert_eq!(line, line.trim_end());
        }
    }

    /// The printer never panics on a well-formed (balanced) token stream, regardless of width.
    #[test]
    fn well_formed_streams_never_panic(tokens in arb_tokens(), cfg in arb_config()) {
        let _ = Context::new("", cfg).pretty_print(&tokens);
    }

    /// Re-printing the output as a single verbatim block reproduces it exactly (idempotence).
    #[test]
    fn reprinting_as_verbatim_is_idempotent(tokens in arb_tokens(), cfg in arb_config()) {
        let first = Context::new("", cfg.clone()).pretty_print(&tokens);
        let again = vec![StreamToken::new(Token::Verbatim(
            typeset_format::VerbatimBlock::new(first.output.clone()),
        ))];
        let second = Context::new(&first.output, cfg).pretty_print(&again);
        prop_assert_eq!(second.output, first.output);
    }
}
