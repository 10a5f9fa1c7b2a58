//! Block lexer coverage: one line-classification rule per test group.

use mdpipe::md::token::text;
use mdpipe::md::{tokenize, Token, TokenKind};
use rstest::rstest;

#[test]
fn heading_carries_level_and_inline_content() {
    let tokens = tokenize("## Two words");
    assert_eq!(
        tokens,
        vec![Token::Heading {
            level: 2,
            content: vec![text("Two words")],
        }]
    );
}

#[rstest]
#[case("# h", 1)]
#[case("### h", 3)]
#[case("###### h", 6)]
fn heading_levels(#[case] line: &str, #[case] level: u8) {
    match &tokenize(line)[0] {
        Token::Heading { level: found, .. } => assert_eq!(*found, level),
        other => panic!("expected heading, got {other:?}"),
    }
}

#[rstest]
#[case("---")]
#[case("***")]
#[case("___")]
#[case("  ---  ")]
fn horizontal_rule_variants(#[case] line: &str) {
    assert_eq!(tokenize(line), vec![Token::HorizontalRule]);
}

#[test]
fn blockquote_requires_marker_space() {
    assert_eq!(
        tokenize("> quoted"),
        vec![Token::Blockquote {
            content: vec![text("quoted")],
        }]
    );
    assert_eq!(tokenize(">tight")[0].kind(), TokenKind::Paragraph);
}

#[rstest]
#[case("* a")]
#[case("- a")]
#[case("+ a")]
fn unordered_markers(#[case] line: &str) {
    assert_eq!(
        tokenize(line),
        vec![Token::UnorderedListItem {
            content: vec![text("a")],
        }]
    );
}

#[test]
fn unordered_strip_is_exactly_two_characters() {
    // Marker plus one separator; extra separator whitespace stays in content.
    assert_eq!(
        tokenize("-   spaced"),
        vec![Token::UnorderedListItem {
            content: vec![text("  spaced")],
        }]
    );
}

#[test]
fn ordered_item_keeps_numeric_label() {
    assert_eq!(
        tokenize("12. twelfth"),
        vec![Token::OrderedListItem {
            number: 12,
            content: vec![text("twelfth")],
        }]
    );
    // No separator whitespace: not a list item.
    assert_eq!(tokenize("1.x")[0].kind(), TokenKind::Paragraph);
}

#[test]
fn paragraph_keeps_leading_whitespace() {
    assert_eq!(
        tokenize("  indented"),
        vec![Token::Paragraph {
            content: vec![text("  indented")],
        }]
    );
}

#[test]
fn blank_lines_and_trailing_newline() {
    assert_eq!(
        tokenize("a\n\nb\n")
            .iter()
            .map(Token::kind)
            .collect::<Vec<_>>(),
        vec![
            TokenKind::Paragraph,
            TokenKind::LineBreak,
            TokenKind::Paragraph,
            TokenKind::LineBreak,
        ]
    );
    assert_eq!(tokenize(""), vec![Token::LineBreak]);
}

#[test]
fn code_fence_accumulates_verbatim() {
    assert_eq!(
        tokenize("```rust\nfn main() {}\n\n  spaced\n```"),
        vec![Token::CodeBlock {
            content: "fn main() {}\n\n  spaced\n".to_string(),
            language: "rust".to_string(),
            run: false,
            tools: vec![],
        }]
    );
}

#[test]
fn code_fence_ignores_other_rules_inside() {
    // A heading-shaped line inside a fence is content, not a heading.
    let tokens = tokenize("```\n# not a heading\n```");
    assert_eq!(
        tokens,
        vec![Token::CodeBlock {
            content: "# not a heading\n".to_string(),
            language: String::new(),
            run: false,
            tools: vec![],
        }]
    );
}

#[test]
fn run_directive_with_tools() {
    assert_eq!(
        tokenize("```run:js tools=gmail,openai\nsend()\n```"),
        vec![Token::CodeBlock {
            content: "send()\n".to_string(),
            language: "js".to_string(),
            run: true,
            tools: vec!["gmail".to_string(), "openai".to_string()],
        }]
    );
}

#[test]
fn unterminated_fence_closes_at_end_of_input() {
    assert_eq!(
        tokenize("```py\nprint(1)"),
        vec![Token::CodeBlock {
            content: "print(1)\n".to_string(),
            language: "py".to_string(),
            run: false,
            tools: vec![],
        }]
    );
}

#[test]
fn closing_fence_remainder_is_ignored() {
    let tokens = tokenize("```\nx\n``` trailing");
    assert_eq!(
        tokens,
        vec![Token::CodeBlock {
            content: "x\n".to_string(),
            language: String::new(),
            run: false,
            tools: vec![],
        }]
    );
}
