//! # mdpipe
//!
//! A tokenizer and render pipeline for a restricted markdown dialect.
//!
//! The crate is a two-stage pipeline. A line-oriented lexer partitions raw
//! text into block-level tokens, recursing into spans for inline elements.
//! A parser then walks the token sequence exactly once, inferring list
//! boundaries and dispatching every token to the handlers registered by
//! extensions. Extensions collaborate on a shared render context; the
//! bundled HTML extension is one such consumer, not part of the core.
//!
//! For shared test extensions and testing notes, see the
//! [testing module](md::testing).

pub mod md;

pub use md::{render, to_html};
