//! # Block Parsing
//!
//! Two-phase block parsing over the lines of one source string.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` holding local facts (blank status, fence signature)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` tracks the one leaf
//!    that is open (paragraph, list run or fence) and emits `BlockNode`s as
//!    leaves close
//!
//! ## Modules
//!
//! - **`types`**: `Block` and `BlockNode`
//! - **`kinds`**: block-specific types with owned delimiters (CodeFence,
//!   Heading, BulletList)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`open`**: `try_open_leaf` dispatch for detecting block openers
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - An unterminated fence closes at end of input
//! - Every non-blank line ends up in exactly one block

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::{Block, BlockNode};
