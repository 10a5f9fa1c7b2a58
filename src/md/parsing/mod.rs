//! Parsing stage: single-pass handler dispatch over the token sequence.
//!
//! The parser owns the token sequence and a registry mapping each token kind
//! to the handlers contributed by registered extensions. `parse()` makes one
//! forward pass: per token it first runs list-context tracking (which may
//! synthesize and dispatch `ListStart`/`ListEnd` tokens inline), then hands
//! the token to its handlers together with a positional view and the shared
//! render context. Lifecycle hooks bracket the pass in registration order.
//!
//! A parser instance is single-use state: `use_extension` mutates the
//! registry and `parse` drives the extensions mutably, so concurrent parses
//! need one parser each.

pub mod error;
pub mod list_context;

use std::collections::HashMap;

use crate::md::extension::{Extension, Handler};
use crate::md::token::{Token, TokenKind};

pub use error::ParseError;
pub use list_context::ListContext;

/// Positional view of one token, computed at dispatch time.
///
/// Synthetic list-boundary tokens carry no position: `index` is `None` and
/// the flags and neighbors are empty. Neighbors reference the canonical
/// lexer-produced sequence, never annotated copies.
#[derive(Debug, Clone, Copy)]
pub struct TokenInfo<'a> {
    pub token: &'a Token,
    pub index: Option<usize>,
    pub is_first: bool,
    pub is_last: bool,
    pub previous: Option<&'a Token>,
    pub next: Option<&'a Token>,
}

impl<'a> TokenInfo<'a> {
    fn synthetic(token: &'a Token) -> Self {
        TokenInfo {
            token,
            index: None,
            is_first: false,
            is_last: false,
            previous: None,
            next: None,
        }
    }
}

/// The mutable accumulator shared across one parse pass.
///
/// Owned exclusively by one `parse()` call. Extensions collaborate on the
/// accumulator; the list stack is maintained by the parser and readable by
/// any handler that needs nesting awareness.
#[derive(Debug)]
pub struct RenderContext<A> {
    pub accumulator: A,
    list_stack: Vec<ListContext>,
}

impl<A> RenderContext<A> {
    fn new(accumulator: A) -> Self {
        RenderContext {
            accumulator,
            list_stack: Vec::new(),
        }
    }

    /// All open list contexts, outermost first.
    pub fn list_stack(&self) -> &[ListContext] {
        &self.list_stack
    }

    /// The innermost open list context, if any.
    pub fn current_list(&self) -> Option<&ListContext> {
        self.list_stack.last()
    }
}

type Registry<A> = HashMap<TokenKind, Vec<Handler<A>>>;

/// Walks the token sequence and dispatches each token to the handlers
/// registered by extensions.
pub struct Parser<A> {
    tokens: Vec<Token>,
    extensions: Vec<Box<dyn Extension<A>>>,
    handlers: Registry<A>,
}

impl<A> Parser<A> {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            extensions: Vec::new(),
            handlers: HashMap::new(),
        }
    }

    /// The canonical token sequence this parser walks.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Register an extension.
    ///
    /// Handlers are appended to their kind's dispatch list, so calling this
    /// repeatedly builds a multi-extension pipeline that preserves
    /// registration order. Rejects extensions without a usable name.
    pub fn use_extension<E>(&mut self, extension: E) -> Result<&mut Self, ParseError>
    where
        E: Extension<A> + 'static,
    {
        if extension.name().trim().is_empty() {
            return Err(ParseError::InvalidExtension(
                "extension must expose a non-empty name".to_string(),
            ));
        }
        for (kind, handler) in extension.handlers() {
            self.handlers.entry(kind).or_default().push(handler);
        }
        self.extensions.push(Box::new(extension));
        Ok(self)
    }

    /// Run the single forward pass and return the populated context.
    ///
    /// Hook and handler failures abort the pass and propagate unmodified
    /// inside [`ParseError::Handler`]. Token kinds with no registered
    /// handlers are skipped silently.
    pub fn parse(&mut self) -> Result<RenderContext<A>, ParseError>
    where
        A: Default,
    {
        let Parser {
            tokens,
            extensions,
            handlers,
        } = self;
        let tokens = tokens.as_slice();
        let handlers = &*handlers;

        for extension in extensions.iter_mut() {
            extension.init(tokens).map_err(ParseError::Handler)?;
        }

        let mut context = RenderContext::new(A::default());

        for extension in extensions.iter_mut() {
            extension
                .before_process(&mut context, tokens)
                .map_err(ParseError::Handler)?;
        }

        for (index, token) in tokens.iter().enumerate() {
            track_list_context(handlers, tokens, index, &mut context)?;
            let info = TokenInfo {
                token,
                index: Some(index),
                is_first: index == 0,
                is_last: index + 1 == tokens.len(),
                previous: index.checked_sub(1).and_then(|prev| tokens.get(prev)),
                next: tokens.get(index + 1),
            };
            dispatch(handlers, &info, &mut context)?;
        }

        // Input ending inside a list still gets balanced bracketing.
        while context.current_list().is_some() {
            close_current_list(handlers, &mut context)?;
        }

        for extension in extensions.iter_mut() {
            extension
                .after_process(&mut context)
                .map_err(ParseError::Handler)?;
        }

        Ok(context)
    }
}

/// Invoke, in registration order, every handler registered for the token's
/// kind.
fn dispatch<A>(
    handlers: &Registry<A>,
    info: &TokenInfo<'_>,
    context: &mut RenderContext<A>,
) -> Result<(), ParseError> {
    for handler in handlers.get(&info.token.kind()).into_iter().flatten() {
        handler(info, context).map_err(ParseError::Handler)?;
    }
    Ok(())
}

/// One tracking step, run before the token's own handlers.
fn track_list_context<A>(
    handlers: &Registry<A>,
    tokens: &[Token],
    index: usize,
    context: &mut RenderContext<A>,
) -> Result<(), ParseError> {
    let token = &tokens[index];
    match token.list_item_type() {
        Some(kind) => {
            let previous_same = index
                .checked_sub(1)
                .and_then(|prev| tokens.get(prev))
                .and_then(Token::list_item_type)
                == Some(kind);
            if !previous_same {
                // Switching list kind closes the active run before the new
                // one opens; same-kind runs interrupted earlier nest instead.
                if context
                    .current_list()
                    .is_some_and(|active| active.list_type != kind)
                {
                    close_current_list(handlers, context)?;
                }
                context.list_stack.push(ListContext::new(kind));
                let start = Token::ListStart { list_type: kind };
                dispatch(handlers, &TokenInfo::synthetic(&start), context)?;
            }
            if let Some(active) = context.list_stack.last_mut() {
                active.items.push(token.clone());
            }
        }
        None => {
            let continues = context.current_list().is_some_and(|active| {
                tokens.get(index + 1).and_then(Token::list_item_type) == Some(active.list_type)
            });
            if context.current_list().is_some() && !continues {
                close_current_list(handlers, context)?;
            }
        }
    }
    Ok(())
}

/// Dispatch the `ListEnd` token for the innermost open context, then pop it.
/// The closing context is still on the stack while its handlers run.
fn close_current_list<A>(
    handlers: &Registry<A>,
    context: &mut RenderContext<A>,
) -> Result<(), ParseError> {
    let end = match context.current_list() {
        Some(active) => active.end_token(),
        None => return Ok(()),
    };
    dispatch(handlers, &TokenInfo::synthetic(&end), context)?;
    context.list_stack.pop();
    Ok(())
}
