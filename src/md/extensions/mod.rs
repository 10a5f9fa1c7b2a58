//! Bundled extensions.
//!
//! Each extension here is one rendering target built on the open handler
//! protocol; none of them is special to the core pipeline.

pub mod html;

pub use html::HtmlExtension;
