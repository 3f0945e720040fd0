use super::span::Span;

/// A reference to a single source line with its byte span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// Byte span of the line content, excluding the `\n` / `\r\n` terminator.
    pub span: Span,
    /// The line text without its terminator.
    pub text: &'a str,
}

/// Returns an iterator over lines with their byte spans.
///
/// Splits like [`str::lines`]: a final line terminator does not produce an
/// extra empty line, and a `\r` before `\n` is not part of the line text.
pub fn lines_with_spans(s: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut offset = 0usize;
    s.split_inclusive('\n').map(move |raw| {
        let start = offset;
        offset += raw.len();
        let text = raw.strip_suffix('\n').unwrap_or(raw);
        let text = text.strip_suffix('\r').unwrap_or(text);
        LineRef {
            span: Span::new(start, start + text.len()),
            text,
        }
    })
}
