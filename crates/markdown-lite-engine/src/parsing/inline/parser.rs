use super::{
    candidates::{Candidate, collect_candidates},
    types::Inline,
};

/// Parses inline content into a sequence of [`Inline`] spans.
///
/// # Resolution
/// Code, bold and italic candidates are collected independently, merged in
/// start order, then walked once: a candidate survives only if it does not
/// overlap one that already survived. Nothing nests.
///
/// # Returns
/// Spans whose source forms concatenate back to `s` exactly. Text between
/// surviving candidates is emitted as [`Inline::Text`]; empty input yields an
/// empty vector.
pub fn parse_inline(s: &str) -> Vec<Inline> {
    let candidates = collect_candidates(s);
    let found = candidates.len();
    let kept = resolve_overlaps(candidates);
    log::trace!(
        "inline: {} candidates, {} kept over {} bytes",
        found,
        kept.len(),
        s.len()
    );
    fill_gaps(s, &kept)
}

/// Keeps the first candidate of every overlapping group, in sort order.
///
/// `candidates` must be sorted by start offset.
pub fn resolve_overlaps(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let mut kept: Vec<Candidate> = Vec::with_capacity(candidates.len());
    for c in candidates {
        // kept spans are disjoint and ordered, so only the last can reach c
        if kept.last().is_some_and(|k| k.full.overlaps(c.full)) {
            continue;
        }
        kept.push(c);
    }
    kept
}

/// Emits kept candidates with `Text` for every non-empty gap around them.
fn fill_gaps(s: &str, kept: &[Candidate]) -> Vec<Inline> {
    fn flush_text(out: &mut Vec<Inline>, s: &str, start: usize, end: usize) {
        if end > start {
            out.push(Inline::Text(s[start..end].to_string()));
        }
    }

    let mut out = Vec::with_capacity(kept.len() * 2 + 1);
    let mut text_start = 0;
    for c in kept {
        flush_text(&mut out, s, text_start, c.full.start);
        out.push(c.to_inline(s));
        text_start = c.full.end;
    }
    flush_text(&mut out, s, text_start, s.len());
    out
}
