//! Errors surfaced by the parser.

use std::fmt;

use crate::md::extension::HandlerError;

/// Errors that can occur during extension registration or the parse pass.
///
/// The lexing stage has no error type by design: it is total over all input
/// strings. These two cases are the only fallibility in the pipeline.
#[derive(Debug)]
pub enum ParseError {
    /// `use_extension` received an extension without a usable name
    InvalidExtension(String),
    /// A handler or lifecycle hook failed; the inner error is unmodified
    Handler(HandlerError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidExtension(msg) => write!(f, "Invalid extension: {}", msg),
            ParseError::Handler(err) => write!(f, "Handler failed: {}", err),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::InvalidExtension(_) => None,
            ParseError::Handler(err) => Some(err.as_ref()),
        }
    }
}
