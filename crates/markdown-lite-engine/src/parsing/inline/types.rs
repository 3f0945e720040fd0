use serde::{Deserialize, Serialize};

use super::kinds::{CodeSpan, Emphasis, Strong};

/// A typed run of text inside a heading, paragraph or list item.
///
/// Spans never nest: the payload of `Code`, `Bold` and `Italic` is the literal
/// text between the delimiters and is never parsed again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum Inline {
    /// Plain text outside any recognised construct, delimiters included.
    Text(String),
    /// Backtick-delimited code. A raw zone: nothing inside is parsed.
    Code(String),
    /// `**strong**` text.
    Bold(String),
    /// `*emphasised*` text.
    Italic(String),
}

impl Inline {
    /// The payload with delimiters stripped.
    pub fn text(&self) -> &str {
        match self {
            Inline::Text(s) | Inline::Code(s) | Inline::Bold(s) | Inline::Italic(s) => s,
        }
    }

    /// Rebuilds the exact source substring this span covers.
    pub fn source(&self) -> String {
        let (open, close) = match self {
            Inline::Text(s) => return s.clone(),
            Inline::Code(_) => (CodeSpan::DELIM, CodeSpan::DELIM),
            Inline::Bold(_) => (Strong::DELIM, Strong::DELIM),
            Inline::Italic(_) => (Emphasis::DELIM, Emphasis::DELIM),
        };
        format!("{open}{}{close}", self.text())
    }
}

/// Concatenates the source form of every span.
pub fn to_source(spans: &[Inline]) -> String {
    spans.iter().map(Inline::source).collect()
}
