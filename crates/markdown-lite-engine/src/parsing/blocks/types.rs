use serde::{Deserialize, Serialize};

use crate::parsing::{inline::Inline, text::Span};

/// A top-level structural unit of a document.
///
/// Variants carry semantic payload only; how they look is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// `# `, `## ` or `### ` heading.
    Heading {
        /// 1 to 3.
        level: u8,
        content: Vec<Inline>,
    },
    /// Consecutive default lines, joined with `\n` before inline parsing.
    Paragraph { content: Vec<Inline> },
    /// Fenced code. Lines are verbatim and never inline-parsed.
    CodeBlock {
        /// Info text after the opening fence; empty when absent.
        language: String,
        lines: Vec<String>,
    },
    /// A contiguous run of bullet lines, one entry per item.
    List { items: Vec<Vec<Inline>> },
}

impl Block {
    /// Short lowercase name of the variant, for logs and outlines.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "heading",
            Block::Paragraph { .. } => "paragraph",
            Block::CodeBlock { .. } => "code_block",
            Block::List { .. } => "list",
        }
    }
}

/// A parsed block together with the source lines it consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNode {
    pub block: Block,
    /// From the start of the block's first line to the end of its last line,
    /// fences included.
    pub span: Span,
}
