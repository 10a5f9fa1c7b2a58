//! The extension contract: named handler bundles plus lifecycle hooks.
//!
//! An extension defines one rendering target. It contributes handlers keyed
//! by [`TokenKind`]; during the parse pass every token is offered to every
//! handler registered for its kind, in registration order across all
//! extensions. Handlers work by mutating the shared render context; their
//! only other obligation is to report failure, which aborts the parse.
//!
//! The accumulator type parameter `A` is how the core stays agnostic of what
//! extensions build: the HTML extension picks `String`, a test extension may
//! pick a kind trace, and every extension in one pipeline shares the same
//! choice.

use crate::md::parsing::{RenderContext, TokenInfo};
use crate::md::token::{Token, TokenKind};

/// Error type for handlers and lifecycle hooks. Propagated out of
/// [`Parser::parse`](crate::md::parsing::Parser::parse) unmodified.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// A per-token-kind handler. Side effects on the context are the point;
/// no return value is consumed beyond the error.
pub type Handler<A> = Box<dyn Fn(&TokenInfo<'_>, &mut RenderContext<A>) -> Result<(), HandlerError>>;

/// A pluggable rendering target.
pub trait Extension<A> {
    /// Identifying name; registration rejects an empty one.
    fn name(&self) -> &str;

    /// The handler bundle, consumed once at registration time.
    fn handlers(&self) -> Vec<(TokenKind, Handler<A>)>;

    /// Called at the start of every parse, before the context exists.
    fn init(&mut self, tokens: &[Token]) -> Result<(), HandlerError> {
        let _ = tokens;
        Ok(())
    }

    /// Called with the fresh context before dispatch begins; the place to
    /// seed or reset the accumulator.
    fn before_process(
        &mut self,
        context: &mut RenderContext<A>,
        tokens: &[Token],
    ) -> Result<(), HandlerError> {
        let _ = (context, tokens);
        Ok(())
    }

    /// Called after the full token pass.
    fn after_process(&mut self, context: &mut RenderContext<A>) -> Result<(), HandlerError> {
        let _ = context;
        Ok(())
    }
}
