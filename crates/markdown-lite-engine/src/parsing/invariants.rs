//! Runtime checks for parser output, used by unit, fixture and property tests.

use crate::parsing::{
    blocks::{Block, BlockNode},
    inline::{Inline, to_source},
    text::lines_with_spans,
};

/// Validates block output against its source.
///
/// Asserts that:
/// - All block spans are within bounds, ordered and disjoint
/// - Every non-blank line lies inside exactly one block span
/// - Heading and paragraph content rebuilds the text the block consumed
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check_blocks(src: &str, nodes: &[BlockNode]) {
    let n = src.len();
    for pair in nodes.windows(2) {
        assert!(
            pair[0].span.end <= pair[1].span.start,
            "block spans out of order or overlapping: {:?} then {:?}",
            pair[0].span,
            pair[1].span
        );
    }

    for node in nodes {
        assert!(
            node.span.start <= node.span.end && node.span.end <= n,
            "block span out of bounds: {:?} (source len: {})",
            node.span,
            n
        );
        let consumed = node.span.slice(src);
        match &node.block {
            Block::Heading { content, .. } => {
                let rebuilt = to_source(content);
                assert!(
                    consumed.ends_with(&rebuilt),
                    "heading content {rebuilt:?} is not the tail of {consumed:?}"
                );
            }
            Block::Paragraph { content } => {
                let rebuilt = to_source(content);
                assert_eq!(
                    rebuilt,
                    consumed.replace("\r\n", "\n"),
                    "paragraph content does not rebuild its lines"
                );
            }
            Block::List { items } => check_no_empty_text(items.iter().flatten()),
            Block::CodeBlock { .. } => {}
        }
    }

    for line in lines_with_spans(src) {
        if line.text.trim().is_empty() {
            continue;
        }
        let owners = nodes
            .iter()
            .filter(|b| b.span.start <= line.span.start && line.span.end <= b.span.end)
            .count();
        assert_eq!(
            owners, 1,
            "line {:?} at {:?} belongs to {} blocks",
            line.text, line.span, owners
        );
    }
}

/// Validates an inline sequence against the text it was parsed from.
///
/// Asserts that the spans rebuild `src` exactly, that no `Text` span is empty
/// and that no two `Text` spans are adjacent.
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check_inline(src: &str, spans: &[Inline]) {
    assert_eq!(to_source(spans), src, "inline spans do not rebuild source");
    check_no_empty_text(spans.iter());
    for pair in spans.windows(2) {
        assert!(
            !matches!(pair, [Inline::Text(_), Inline::Text(_)]),
            "adjacent text spans: {pair:?}"
        );
    }
}

fn check_no_empty_text<'a>(spans: impl Iterator<Item = &'a Inline>) {
    for span in spans {
        assert!(
            !matches!(span, Inline::Text(t) if t.is_empty()),
            "empty text span"
        );
    }
}
