//! The markdown pipeline: token model, lexing, parsing, and extensions.
//!
//! Pipeline layout
//!
//!     raw text
//!       -> lexing::tokenize          line-driven block lexer
//!          -> lexing::inline          recursive inline tokenizer
//!       -> parsing::Parser            single-pass handler dispatch
//!          -> parsing list tracking   synthesized ListStart/ListEnd tokens
//!       -> RenderContext              accumulator produced by extension handlers
//!
//! The lexer is total: every input string produces a token sequence, never an
//! error. Malformed constructs degrade to plain text or, for an unterminated
//! code fence, to a code block closed at end of input. All fallibility lives
//! in the parser: extension registration can be rejected, and handler
//! failures propagate out of `parse()` unmodified.

pub mod extension;
pub mod extensions;
pub mod lexing;
pub mod parsing;
pub mod testing;
pub mod token;

pub use extension::{Extension, Handler, HandlerError};
pub use extensions::html::HtmlExtension;
pub use lexing::{tokenize, tokenize_inline};
pub use parsing::{ListContext, ParseError, Parser, RenderContext, TokenInfo};
pub use token::{ListType, Token, TokenKind};

/// Lex the input and run it through a parser with a single registered
/// extension, returning the populated render context.
///
/// This is the main entry point for one-shot rendering. For multi-extension
/// pipelines, build a [`Parser`] and call [`Parser::use_extension`] once per
/// extension.
pub fn render<A, E>(input: &str, extension: E) -> Result<RenderContext<A>, ParseError>
where
    A: Default,
    E: Extension<A> + 'static,
{
    let tokens = tokenize(input);
    let mut parser = Parser::new(tokens);
    parser.use_extension(extension)?;
    parser.parse()
}

/// Render markdown to an HTML string using the bundled [`HtmlExtension`].
pub fn to_html(input: &str) -> Result<String, ParseError> {
    render(input, HtmlExtension::new()).map(|context| context.accumulator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_returns_extension_accumulator() {
        let html = to_html("# Title\n\nSome **bold** text.").unwrap();
        assert_eq!(html, "<h1>Title</h1><p>Some <strong>bold</strong> text.</p>");
    }
}
