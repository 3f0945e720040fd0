pub mod blocks;
pub mod inline;
pub mod invariants;
pub mod text;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use blocks::{Block, BlockBuilder, BlockNode, MarkdownLineClassifier};
use inline::Inline;
use text::lines_with_spans;

/// An ordered sequence of blocks, produced fresh by every parse call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    /// A document holding `text` as one unparsed paragraph.
    pub fn literal(text: &str) -> Self {
        let content = if text.is_empty() {
            vec![]
        } else {
            vec![Inline::Text(text.to_string())]
        };
        Self {
            blocks: vec![Block::Paragraph { content }],
        }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

/// Segments `text` into blocks, keeping each block's source span.
pub fn parse_blocks(text: &str) -> Vec<BlockNode> {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for lr in lines_with_spans(text) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    builder.finish()
}

/// Parses `text` into a [`Document`]. Never fails; empty or all-blank input
/// gives an empty document.
pub fn parse_document(text: &str) -> Document {
    let blocks: Vec<Block> = parse_blocks(text).into_iter().map(|n| n.block).collect();
    log::debug!("parsed {} bytes into {} blocks", text.len(), blocks.len());
    Document { blocks }
}

/// Like [`parse_document`], but a document with no blocks is replaced by
/// [`Document::literal`] so callers always have something to show.
pub fn parse_or_literal(text: &str) -> Document {
    let doc = parse_document(text);
    if doc.is_empty() {
        log::debug!("no blocks found, falling back to a literal paragraph");
        return Document::literal(text);
    }
    doc
}
