//! Inline tokenizer: recursive scanning of text spans.
//!
//! The scanner walks a span left to right. At each position it tries, in
//! fixed priority order: bold, italic, inline code, link, image, and finally
//! plain text up to the next special character (`*`, `_`, `` ` ``, `[`).
//! Emphasis spans recurse into their captured content; code spans are taken
//! literally. A special character no pattern claims is skipped without
//! producing a token, which is also what guarantees termination: every
//! iteration advances the scan position by at least one character.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::md::token::Token;

/// Link: `[text](url)`, both captures non-greedy.
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[(.*?)\]\((.*?)\)").unwrap());

/// Image: `![alt](url)`, both captures non-greedy.
static IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^!\[(.*?)\]\((.*?)\)").unwrap());

/// Nesting bound for pathological inputs such as a long run of emphasis
/// markers; past it, captured content is kept as literal text.
const MAX_DEPTH: usize = 64;

/// Tokenize one text span into inline tokens.
///
/// Total and pure, like the block lexer: unmatched delimiters fail their
/// pattern and degrade to plain text handling.
pub fn tokenize_inline(text: &str) -> Vec<Token> {
    scan(text, 0)
}

fn scan(text: &str, depth: usize) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut position = 0;

    while position < text.len() {
        let rest = &text[position..];

        // Bold: `**` or `__` up to the earliest same delimiter.
        if let Some((content, consumed)) = delimited(rest, "**").or_else(|| delimited(rest, "__"))
        {
            tokens.push(Token::Bold {
                content: nested(content, depth),
            });
            position += consumed;
            continue;
        }

        // Italic: single `*` or `_`, unless the suffix opens a bold span.
        if !rest.starts_with("**") {
            if let Some((content, consumed)) = delimited(rest, "*").or_else(|| delimited(rest, "_"))
            {
                tokens.push(Token::Italic {
                    content: nested(content, depth),
                });
                position += consumed;
                continue;
            }
        }

        // Inline code: literal content, no recursion.
        if let Some((content, consumed)) = delimited(rest, "`") {
            tokens.push(Token::CodeInline {
                content: content.to_string(),
            });
            position += consumed;
            continue;
        }

        if let Some(caps) = LINK.captures(rest) {
            tokens.push(Token::Link {
                text: caps[1].to_string(),
                url: caps[2].to_string(),
            });
            position += caps[0].len();
            continue;
        }

        if let Some(caps) = IMAGE.captures(rest) {
            tokens.push(Token::Image {
                alt: caps[1].to_string(),
                url: caps[2].to_string(),
            });
            position += caps[0].len();
            continue;
        }

        // Plain text up to the next special character. An unclaimed special
        // character at the scan position is skipped without a token.
        match rest.find(&['*', '_', '`', '['][..]) {
            Some(0) => {
                position += rest.chars().next().map_or(1, char::len_utf8);
            }
            Some(end) => {
                tokens.push(Token::Text {
                    content: rest[..end].to_string(),
                });
                position += end;
            }
            None => {
                tokens.push(Token::Text {
                    content: rest.to_string(),
                });
                position = text.len();
            }
        }
    }

    tokens
}

/// Recurse into captured emphasis content, or keep it literal past the
/// nesting bound.
fn nested(content: &str, depth: usize) -> Vec<Token> {
    if depth < MAX_DEPTH {
        scan(content, depth + 1)
    } else if content.is_empty() {
        Vec::new()
    } else {
        vec![Token::Text {
            content: content.to_string(),
        }]
    }
}

/// Match `<delim><content><delim>` at the start of `rest`, taking the
/// earliest possible close. Returns the content and the bytes consumed.
fn delimited<'a>(rest: &'a str, delim: &str) -> Option<(&'a str, usize)> {
    let body = rest.strip_prefix(delim)?;
    let end = body.find(delim)?;
    Some((&body[..end], delim.len() * 2 + end))
}
