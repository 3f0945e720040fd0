//! # Inline Parsing
//!
//! Candidate collection followed by overlap resolution.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs over the full text
//! of inline-eligible blocks (headings, paragraphs, list items). Code block
//! lines never reach it.
//!
//! 1. Each delimiter family (code, bold, italic) is scanned on its own,
//!    producing [`candidates::Candidate`]s.
//! 2. Candidates are merged by start offset and reduced to a disjoint set;
//!    the first one in sort order wins any overlap.
//! 3. Gaps between survivors become `Text`.
//!
//! ## Modules
//!
//! - **`types`**: `Inline` enum (Text, Code, Bold, Italic)
//! - **`kinds`**: delimiter owners (CodeSpan, Strong, Emphasis)
//! - **`cursor`**: `Cursor` for byte-wise scanning with position tracking
//! - **`candidates`**: per-family scanners
//! - **`parser`**: `parse_inline()` entry point, overlap resolution, gap filling
//!
//! ## Precedence
//!
//! Code spans are raw zones: `` `**x**` `` is a single `Code` span. Between
//! the two star families bold wins; an italic never starts inside bold.

pub mod candidates;
pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::{Inline, to_source};
