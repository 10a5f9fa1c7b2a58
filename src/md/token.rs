//! Token types shared across the lexer, parser, and extensions.
//!
//! Tokens come in two layers: block-level tokens produced directly by the
//! block lexer, and inline-level tokens nested inside block content (and
//! inside each other, to arbitrary depth: bold-within-italic is one token
//! tree). `ListStart` and `ListEnd` are never produced by the lexer; the
//! parser synthesizes them around runs of list items.
//!
//! Tokens are immutable once produced. Positional metadata (index, first,
//! last, neighbors) is computed by the parser at dispatch time and handed to
//! handlers through [`TokenInfo`](crate::md::parsing::TokenInfo) rather than
//! stored here, so the token tree stays free of back-references.

use std::fmt;

/// The classification of a token, used as the handler dispatch key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum TokenKind {
    /// `#`-prefixed heading, levels 1-6
    Heading,
    /// Any line no other rule claims
    Paragraph,
    /// Fenced code block, with optional run directive
    CodeBlock,
    /// Line starting with `> `
    Blockquote,
    /// A line that is exactly `---`, `***`, or `___`
    HorizontalRule,
    /// Synthetic: a run of same-kind list items begins
    ListStart,
    /// Synthetic: a run of same-kind list items ends
    ListEnd,
    /// Line starting with `*`, `-`, or `+` plus whitespace
    UnorderedListItem,
    /// Line starting with `<digits>.` plus whitespace
    OrderedListItem,
    /// Blank line
    LineBreak,
    /// `**bold**` or `__bold__` span
    Bold,
    /// `*italic*` or `_italic_` span
    Italic,
    /// Backtick-delimited literal span
    CodeInline,
    /// `[text](url)`
    Link,
    /// `![alt](url)`
    Image,
    /// Plain text run
    Text,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 16] = [
        TokenKind::Heading,
        TokenKind::Paragraph,
        TokenKind::CodeBlock,
        TokenKind::Blockquote,
        TokenKind::HorizontalRule,
        TokenKind::ListStart,
        TokenKind::ListEnd,
        TokenKind::UnorderedListItem,
        TokenKind::OrderedListItem,
        TokenKind::LineBreak,
        TokenKind::Bold,
        TokenKind::Italic,
        TokenKind::CodeInline,
        TokenKind::Link,
        TokenKind::Image,
        TokenKind::Text,
    ];
}

/// Whether a list is ordered or unordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ListType {
    Unordered,
    Ordered,
}

impl ListType {
    /// The HTML-style tag name for this list kind (`"ul"` / `"ol"`).
    pub fn tag(self) -> &'static str {
        match self {
            ListType::Unordered => "ul",
            ListType::Ordered => "ol",
        }
    }
}

impl fmt::Display for ListType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One parsed unit of structure, block-level or inline-level.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Token {
    Heading {
        /// Number of `#` characters, 1 through 6
        level: u8,
        content: Vec<Token>,
    },
    Paragraph {
        content: Vec<Token>,
    },
    CodeBlock {
        /// Interior lines, each with its line terminator re-appended
        content: String,
        /// Language tag; empty when the fence carried none
        language: String,
        /// Set by the `run:` fence directive
        run: bool,
        /// Tool names from the `tools=` fence parameter
        tools: Vec<String>,
    },
    Blockquote {
        content: Vec<Token>,
    },
    HorizontalRule,
    ListStart {
        list_type: ListType,
    },
    ListEnd {
        list_type: ListType,
        /// The item tokens accumulated over the run this token closes
        items: Vec<Token>,
    },
    UnorderedListItem {
        content: Vec<Token>,
    },
    OrderedListItem {
        /// The literal numeric label from the source line
        number: u64,
        content: Vec<Token>,
    },
    LineBreak,
    Bold {
        content: Vec<Token>,
    },
    Italic {
        content: Vec<Token>,
    },
    CodeInline {
        /// Taken literally, never inline-parsed
        content: String,
    },
    Link {
        text: String,
        url: String,
    },
    Image {
        alt: String,
        url: String,
    },
    Text {
        content: String,
    },
}

impl Token {
    /// The dispatch key for this token.
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Heading { .. } => TokenKind::Heading,
            Token::Paragraph { .. } => TokenKind::Paragraph,
            Token::CodeBlock { .. } => TokenKind::CodeBlock,
            Token::Blockquote { .. } => TokenKind::Blockquote,
            Token::HorizontalRule => TokenKind::HorizontalRule,
            Token::ListStart { .. } => TokenKind::ListStart,
            Token::ListEnd { .. } => TokenKind::ListEnd,
            Token::UnorderedListItem { .. } => TokenKind::UnorderedListItem,
            Token::OrderedListItem { .. } => TokenKind::OrderedListItem,
            Token::LineBreak => TokenKind::LineBreak,
            Token::Bold { .. } => TokenKind::Bold,
            Token::Italic { .. } => TokenKind::Italic,
            Token::CodeInline { .. } => TokenKind::CodeInline,
            Token::Link { .. } => TokenKind::Link,
            Token::Image { .. } => TokenKind::Image,
            Token::Text { .. } => TokenKind::Text,
        }
    }

    /// True for both ordered and unordered list items.
    pub fn is_list_item(&self) -> bool {
        self.list_item_type().is_some()
    }

    /// The list kind this token belongs to, when it is a list item.
    pub fn list_item_type(&self) -> Option<ListType> {
        match self {
            Token::UnorderedListItem { .. } => Some(ListType::Unordered),
            Token::OrderedListItem { .. } => Some(ListType::Ordered),
            _ => None,
        }
    }

    /// Nested child tokens, for the kinds that carry them.
    pub fn children(&self) -> Option<&[Token]> {
        match self {
            Token::Heading { content, .. }
            | Token::Paragraph { content }
            | Token::Blockquote { content }
            | Token::UnorderedListItem { content }
            | Token::OrderedListItem { content, .. }
            | Token::Bold { content }
            | Token::Italic { content } => Some(content),
            Token::ListEnd { items, .. } => Some(items),
            _ => None,
        }
    }
}

/// Convenience constructor for plain-text tokens.
pub fn text(content: impl Into<String>) -> Token {
    Token::Text {
        content: content.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(text("x").kind(), TokenKind::Text);
        assert_eq!(Token::HorizontalRule.kind(), TokenKind::HorizontalRule);
        assert_eq!(
            Token::OrderedListItem {
                number: 3,
                content: vec![],
            }
            .kind(),
            TokenKind::OrderedListItem
        );
    }

    #[test]
    fn list_item_type_covers_both_kinds() {
        let ul = Token::UnorderedListItem { content: vec![] };
        let ol = Token::OrderedListItem {
            number: 1,
            content: vec![],
        };
        assert_eq!(ul.list_item_type(), Some(ListType::Unordered));
        assert_eq!(ol.list_item_type(), Some(ListType::Ordered));
        assert_eq!(Token::LineBreak.list_item_type(), None);
    }

    #[test]
    fn list_type_tags() {
        assert_eq!(ListType::Unordered.tag(), "ul");
        assert_eq!(ListType::Ordered.to_string(), "ol");
    }
}
