//! Shared test extensions.
//!
//! Dispatch behavior (list bracketing, ordering, hook sequencing) is best
//! verified by an extension that records what it was handed rather than by
//! inspecting the HTML string. The extensions here exist for that purpose
//! and are used by the integration tests in `tests/`; they are exported so
//! downstream extension authors can reuse them against their own pipelines.

use crate::md::extension::{Extension, Handler, HandlerError};
use crate::md::parsing::RenderContext;
use crate::md::token::{Token, TokenKind};

/// Records the kind of every dispatched token, in dispatch order, into the
/// accumulator. Registers a handler for every kind, so synthetic list
/// boundaries show up too.
pub struct RecordingExtension {
    name: &'static str,
}

impl RecordingExtension {
    pub fn new() -> Self {
        RecordingExtension { name: "recording" }
    }

    /// A distinctly named instance, for registration-order tests that stack
    /// several recorders.
    pub fn named(name: &'static str) -> Self {
        RecordingExtension { name }
    }
}

impl Default for RecordingExtension {
    fn default() -> Self {
        RecordingExtension::new()
    }
}

impl Extension<Vec<TokenKind>> for RecordingExtension {
    fn name(&self) -> &str {
        self.name
    }

    fn handlers(&self) -> Vec<(TokenKind, Handler<Vec<TokenKind>>)> {
        TokenKind::ALL
            .iter()
            .map(|&kind| {
                let handler: Handler<Vec<TokenKind>> = Box::new(move |_info, context| {
                    context.accumulator.push(kind);
                    Ok(())
                });
                (kind, handler)
            })
            .collect()
    }

    fn before_process(
        &mut self,
        context: &mut RenderContext<Vec<TokenKind>>,
        _tokens: &[Token],
    ) -> Result<(), HandlerError> {
        context.accumulator.clear();
        Ok(())
    }
}
