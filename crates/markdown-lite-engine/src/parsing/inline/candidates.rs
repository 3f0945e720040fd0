use crate::parsing::text::Span;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Strong},
    types::Inline,
};

/// Delimiter family of a candidate.
///
/// Declaration order is also the tie-break order for candidates that start at
/// the same offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CandidateKind {
    Code,
    Bold,
    Italic,
}

/// A tentative delimiter-pair match, before overlap resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub kind: CandidateKind,
    /// Full span including delimiters.
    pub full: Span,
    /// Content between the delimiters.
    pub inner: Span,
}

impl Candidate {
    /// Materialises the candidate as an owned inline span over `s`.
    pub fn to_inline(self, s: &str) -> Inline {
        let inner = self.inner.slice(s).to_string();
        match self.kind {
            CandidateKind::Code => Inline::Code(inner),
            CandidateKind::Bold => Inline::Bold(inner),
            CandidateKind::Italic => Inline::Italic(inner),
        }
    }
}

/// Collects code, bold and italic candidates, in that family order, stably
/// sorted by start offset.
pub fn collect_candidates(s: &str) -> Vec<Candidate> {
    let code = code_candidates(s);
    let bold = bold_candidates(s);
    let italic = italic_candidates(s, &bold);

    let mut all = Vec::with_capacity(code.len() + bold.len() + italic.len());
    all.extend(code);
    all.extend(bold);
    all.extend(italic);
    // stable: equal starts keep family order
    all.sort_by_key(|c| c.full.start);
    all
}

/// `` `code` `` pairs. Empty content (two adjacent ticks) never matches.
pub fn code_candidates(s: &str) -> Vec<Candidate> {
    scan_family(
        s,
        CandidateKind::Code,
        CodeSpan::DELIM.as_bytes(),
        CodeSpan::TICK,
        &[],
    )
}

/// `**bold**` pairs whose content contains no `*`.
pub fn bold_candidates(s: &str) -> Vec<Candidate> {
    scan_family(
        s,
        CandidateKind::Bold,
        Strong::DELIM.as_bytes(),
        Strong::STAR,
        &[],
    )
}

/// `*italic*` pairs whose content contains no `*`.
///
/// Openers are never searched for inside a bold candidate: when the scan
/// reaches a bold span it resumes at that span's end, so no italic candidate
/// starts inside bold.
pub fn italic_candidates(s: &str, bold: &[Candidate]) -> Vec<Candidate> {
    let zones: Vec<Span> = bold.iter().map(|b| b.full).collect();
    scan_family(
        s,
        CandidateKind::Italic,
        Emphasis::DELIM.as_bytes(),
        Emphasis::STAR,
        &zones,
    )
}

/// Finds all non-overlapping pairs of one family, left to right.
///
/// After a match the scan continues behind its closing delimiter; after a
/// failed attempt it moves on by one byte. `skip` must be sorted and
/// disjoint; it is walked once alongside the cursor.
fn scan_family(
    s: &str,
    kind: CandidateKind,
    delim: &[u8],
    stop: u8,
    skip: &[Span],
) -> Vec<Candidate> {
    let mut cur = Cursor::new(s);
    let mut zones = skip.iter().peekable();
    let mut out = vec![];

    while !cur.eof() {
        while zones.next_if(|z| z.end <= cur.pos()).is_some() {}
        if let Some(zone) = zones.peek().filter(|z| z.contains(cur.pos())) {
            cur.seek(zone.end);
            continue;
        }
        match try_delimited(&mut cur, delim, stop) {
            Some((full, inner)) => out.push(Candidate { kind, full, inner }),
            None => {
                cur.bump();
            }
        }
    }

    out
}

/// Attempts `delim` + one or more non-`stop` bytes + `delim` at the cursor.
///
/// On failure the cursor position is restored.
fn try_delimited(cur: &mut Cursor<'_>, delim: &[u8], stop: u8) -> Option<(Span, Span)> {
    if !cur.starts_with(delim) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(delim.len());
    let inner_start = cur.pos();
    cur.skip_until(stop);
    let inner_end = cur.pos();

    if inner_end == inner_start || !cur.starts_with(delim) {
        *cur = saved;
        return None;
    }
    cur.bump_n(delim.len());

    Some((
        Span::new(start, cur.pos()),
        Span::new(inner_start, inner_end),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fulls(cands: &[Candidate]) -> Vec<(usize, usize)> {
        cands.iter().map(|c| (c.full.start, c.full.end)).collect()
    }

    #[test]
    fn code_pairs_are_non_greedy() {
        let c = code_candidates("`a` and `b`");
        assert_eq!(fulls(&c), vec![(0, 3), (8, 11)]);
        assert_eq!(c[0].inner, Span::new(1, 2));
    }

    #[test]
    fn empty_code_span_is_skipped() {
        // `` `` `` has no content; the second tick opens the real match
        let c = code_candidates("``a`");
        assert_eq!(fulls(&c), vec![(1, 4)]);
    }

    #[test]
    fn unclosed_code_span_yields_nothing() {
        assert!(code_candidates("`open only").is_empty());
    }

    #[test]
    fn bold_requires_double_star_closer() {
        assert_eq!(fulls(&bold_candidates("**a** **b*")), vec![(0, 5)]);
    }

    #[test]
    fn bold_retries_one_byte_later() {
        // `**` at 0 has empty content, the pair starting at 1 matches
        assert_eq!(fulls(&bold_candidates("***a**")), vec![(1, 6)]);
    }

    #[test]
    fn italic_skips_bold_zones() {
        let s = "**a** and *b*";
        let bold = bold_candidates(s);
        let italic = italic_candidates(s, &bold);
        assert_eq!(fulls(&italic), vec![(10, 13)]);
    }

    #[test]
    fn italic_skips_many_bold_zones_in_order() {
        let s = "**a** *b* **c** *d* **e***f*";
        let bold = bold_candidates(s);
        assert_eq!(fulls(&bold), vec![(0, 5), (10, 15), (20, 25)]);
        let italic = italic_candidates(s, &bold);
        assert_eq!(fulls(&italic), vec![(6, 9), (16, 19), (25, 28)]);
    }

    #[test]
    fn italic_may_start_before_bold() {
        let s = "*a **b** c*";
        let bold = bold_candidates(s);
        assert_eq!(fulls(&bold), vec![(3, 8)]);
        let italic = italic_candidates(s, &bold);
        assert_eq!(fulls(&italic), vec![(0, 4)]);
    }

    #[test]
    fn collect_sorts_by_start_across_families() {
        let c = collect_candidates("*i* `c` **b**");
        let kinds: Vec<_> = c.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                CandidateKind::Italic,
                CandidateKind::Code,
                CandidateKind::Bold
            ]
        );
    }

    #[test]
    fn multibyte_text_between_delimiters() {
        let s = "日本 **強調** です";
        let bold = bold_candidates(s);
        assert_eq!(bold.len(), 1);
        assert_eq!(bold[0].inner.slice(s), "強調");
    }

    #[test]
    fn to_inline_uses_inner_text() {
        let s = "`x`";
        let c = code_candidates(s)[0];
        assert_eq!(c.to_inline(s), Inline::Code("x".into()));
    }
}
