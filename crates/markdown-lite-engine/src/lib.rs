//! Markdown-subset parsing: headings, paragraphs, fenced code blocks and flat
//! bullet lists, with code, bold and italic spans inside them.
//!
//! The output is a plain [`Document`] tree. Nothing here does I/O or knows
//! how the tree will be shown.

pub mod parsing;

// Re-export key types for easier usage
pub use parsing::{
    Document,
    blocks::{Block, BlockNode},
    inline::{Inline, parse_inline},
    parse_blocks, parse_document, parse_or_literal,
    text::Span,
};
