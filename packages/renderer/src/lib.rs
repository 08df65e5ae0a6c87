//! # Pagecraft Renderer
//!
//! Deterministic HTML output for block documents: one pure fragment
//! function per block kind, plus the page assembler that wraps the
//! visible fragments in a standalone document with the page theme
//! inlined.
//!
//! Nothing in this crate mutates the document, and nothing depends on
//! clocks or randomness - the same document and metadata always produce
//! byte-identical HTML. All user-entered text is entity-escaped on the
//! way out; URLs and the rich-text block's `html` field are the only
//! verbatim pass-throughs.

pub mod assembler;
pub mod escape;
pub mod fragments;


pub use assembler::{assemble, render_page, theme_css, PageMeta};
pub use escape::escape_html;
pub use fragments::render_block;
