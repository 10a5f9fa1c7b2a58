//! Lexing stage: raw text to block-level tokens.
//!
//! The block lexer is line-driven. Each line is classified against a fixed
//! precedence chain (fence, horizontal rule, heading, blockquote, list item,
//! blank, paragraph), with one piece of state threaded through the loop: an
//! explicit scanner state tracking whether a fenced code block is open and
//! what it has accumulated so far. Captured text spans are handed to the
//! [inline](inline) tokenizer, which recurses into emphasis spans.
//!
//! Lexing is total. There is no error path: anything malformed falls back to
//! plain text, and a fence still open at end of input is closed there.

pub mod block;
pub mod inline;

pub use block::tokenize;
pub use inline::tokenize_inline;
