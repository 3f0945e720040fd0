use crate::parsing::{inline::parse_inline, text::Span};

use super::{
    classify::LineClass,
    open::{BlockOpen, try_open_leaf},
    types::{Block, BlockNode},
};

/// The block currently accumulating lines.
#[derive(Debug)]
enum LeafState<'a> {
    None,
    Paragraph {
        span: Span,
        lines: Vec<&'a str>,
    },
    List {
        span: Span,
        items: Vec<&'a str>,
    },
    Fence {
        span: Span,
        language: &'a str,
        lines: Vec<&'a str>,
    },
}

/// Line-driven state machine that turns classified lines into blocks.
///
/// Feed every line through [`push`](Self::push) in order, then call
/// [`finish`](Self::finish) to flush whatever is still open.
pub struct BlockBuilder<'a> {
    leaf: LeafState<'a>,
    out: Vec<BlockNode>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'a>) {
        if self.in_fence() {
            self.consume_fence_line(c);
            return;
        }

        if c.is_blank {
            self.flush_leaf();
            return;
        }

        match try_open_leaf(c) {
            Some(BlockOpen::FencedCode { language }) => {
                self.flush_leaf();
                self.leaf = LeafState::Fence {
                    span: c.line,
                    language,
                    lines: vec![],
                };
            }
            Some(BlockOpen::Heading { level, text }) => {
                self.flush_leaf();
                let content = parse_inline(text);
                self.emit(Block::Heading { level, content }, c.line);
            }
            Some(BlockOpen::ListItem { text }) => self.extend_list(c.line, text),
            None => self.extend_paragraph(c.line, c.text),
        }
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF flush; an unterminated fence closes here
        self.flush_leaf();
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn consume_fence_line(&mut self, c: &LineClass<'a>) {
        let LeafState::Fence { span, lines, .. } = &mut self.leaf else {
            return;
        };
        span.end = c.line.end;
        if c.fence_sig.is_none() {
            lines.push(c.text);
            return;
        }
        // closing fence; its info text is ignored
        self.flush_leaf();
    }

    fn extend_list(&mut self, line: Span, text: &'a str) {
        if let LeafState::List { span, items } = &mut self.leaf {
            span.end = line.end;
            items.push(text);
            return;
        }
        self.flush_leaf();
        self.leaf = LeafState::List {
            span: line,
            items: vec![text],
        };
    }

    fn extend_paragraph(&mut self, line: Span, text: &'a str) {
        if let LeafState::Paragraph { span, lines } = &mut self.leaf {
            span.end = line.end;
            lines.push(text);
            return;
        }
        self.flush_leaf();
        self.leaf = LeafState::Paragraph {
            span: line,
            lines: vec![text],
        };
    }

    fn flush_leaf(&mut self) {
        match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::None => {}
            LeafState::Paragraph { span, lines } => {
                let text = lines.join("\n");
                if !text.trim().is_empty() {
                    let content = parse_inline(&text);
                    self.emit(Block::Paragraph { content }, span);
                }
            }
            LeafState::List { span, items } => {
                let items = items.into_iter().map(parse_inline).collect();
                self.emit(Block::List { items }, span);
            }
            LeafState::Fence {
                span,
                language,
                lines,
            } => {
                let block = Block::CodeBlock {
                    language: language.to_string(),
                    lines: lines.into_iter().map(str::to_string).collect(),
                };
                self.emit(block, span);
            }
        }
    }

    fn emit(&mut self, block: Block, span: Span) {
        log::trace!("block {} at {}..{}", block.kind_name(), span.start, span.end);
        self.out.push(BlockNode { block, span });
    }
}

impl Default for BlockBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}
