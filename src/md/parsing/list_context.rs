//! List-context tracking: inferring list boundaries during the parse pass.
//!
//! The lexer emits flat list-item tokens with no grouping signal. This
//! tracker runs once per token, before the token's own handlers, and
//! maintains a stack of open list contexts. Boundaries are synthesized as
//! `ListStart`/`ListEnd` tokens and dispatched through the same handler
//! mechanism as lexed tokens:
//!
//! - a list item whose predecessor is not a same-kind item opens a new
//!   context (closing a differently-kinded active one first: switching list
//!   kind always closes-then-reopens, never merges);
//! - a non-item token closes the active context unless the *next* token
//!   continues it;
//! - contexts still open when the sequence ends are closed innermost-first.
//!
//! Nesting exists only through stack depth; indentation is never consulted.

use crate::md::token::{ListType, Token};

/// One open run of same-kind list items.
#[derive(Debug, Clone, PartialEq)]
pub struct ListContext {
    pub list_type: ListType,
    /// The item tokens accumulated so far; handed to the `ListEnd` token.
    pub items: Vec<Token>,
}

impl ListContext {
    pub(crate) fn new(list_type: ListType) -> Self {
        ListContext {
            list_type,
            items: Vec::new(),
        }
    }

    /// The synthetic token closing this context.
    pub(crate) fn end_token(&self) -> Token {
        Token::ListEnd {
            list_type: self.list_type,
            items: self.items.clone(),
        }
    }
}
