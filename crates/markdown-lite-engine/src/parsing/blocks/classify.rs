use crate::parsing::text::{LineRef, Span};

use super::kinds::{CodeFence, FenceSig};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClass<'a> {
    /// Byte span of this line in the source, terminator excluded.
    pub line: Span,
    /// Line text, terminator excluded.
    pub text: &'a str,
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
    /// If the line looks like a fence opener/closer.
    pub fence_sig: Option<FenceSig<'a>>,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify<'a>(&self, lr: &LineRef<'a>) -> LineClass<'a> {
        LineClass {
            line: lr.span,
            text: lr.text,
            is_blank: lr.text.trim().is_empty(),
            fence_sig: CodeFence::sig(lr.text),
        }
    }
}
