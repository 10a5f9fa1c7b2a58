//! Inline tokenizer coverage, both standalone and through block content.

use mdpipe::md::token::text;
use mdpipe::md::{tokenize, tokenize_inline, Token};

#[test]
fn mixed_inline_sequence() {
    assert_eq!(
        tokenize_inline("a **b** `c` [d](e)"),
        vec![
            text("a "),
            Token::Bold {
                content: vec![text("b")],
            },
            text(" "),
            Token::CodeInline {
                content: "c".to_string(),
            },
            text(" "),
            Token::Link {
                text: "d".to_string(),
                url: "e".to_string(),
            },
        ]
    );
}

#[test]
fn underscore_emphasis() {
    assert_eq!(
        tokenize_inline("__b__ and _i_"),
        vec![
            Token::Bold {
                content: vec![text("b")],
            },
            text(" and "),
            Token::Italic {
                content: vec![text("i")],
            },
        ]
    );
}

#[test]
fn italic_recurses_into_content() {
    assert_eq!(
        tokenize_inline("*a `c`*"),
        vec![Token::Italic {
            content: vec![
                text("a "),
                Token::CodeInline {
                    content: "c".to_string(),
                },
            ],
        }]
    );
}

#[test]
fn earliest_close_wins() {
    // Non-greedy: `*a*` closes at the first `*`, the rest is plain handling.
    assert_eq!(
        tokenize_inline("*a*b*"),
        vec![
            Token::Italic {
                content: vec![text("a")],
            },
            text("b"),
        ]
    );
}

#[test]
fn heading_content_is_inline_tokenized() {
    assert_eq!(
        tokenize("# **T**"),
        vec![Token::Heading {
            level: 1,
            content: vec![Token::Bold {
                content: vec![text("T")],
            }],
        }]
    );
}

#[test]
fn list_item_content_is_inline_tokenized() {
    assert_eq!(
        tokenize("- **x** y"),
        vec![Token::UnorderedListItem {
            content: vec![
                Token::Bold {
                    content: vec![text("x")],
                },
                text(" y"),
            ],
        }]
    );
}

#[test]
fn link_with_empty_captures() {
    assert_eq!(
        tokenize_inline("[]()"),
        vec![Token::Link {
            text: String::new(),
            url: String::new(),
        }]
    );
}

#[test]
fn unclosed_link_degrades() {
    // `[x](y` never completes the pattern; the bracket is skipped and the
    // rest scans as text.
    assert_eq!(tokenize_inline("[x](y"), vec![text("x](y")]);
}
