//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `` ` `` - raw zone that suppresses other parsing
//! - **`Strong`**: `**`
//! - **`Emphasis`**: `*`
//!
//! The scanner reads these constants; it never hardcodes a delimiter.

pub mod code_span;
pub mod emphasis;
pub mod strong;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use strong::Strong;
