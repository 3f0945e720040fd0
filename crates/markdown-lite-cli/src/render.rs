//! Output formats for a parsed [`Document`].
//!
//! The engine hands back plain data; every presentation choice lives here.

use std::fmt::Write;

use anyhow::Result;
use markdown_lite_config::OutputFormat;
use markdown_lite_engine::{Block, Document, Inline};

pub fn render(doc: &Document, format: OutputFormat, pretty: bool) -> Result<String> {
    match format {
        OutputFormat::Tree => Ok(tree(doc)),
        OutputFormat::Json => json(doc, pretty),
        OutputFormat::Html => Ok(html(doc)),
    }
}

/// Indented outline, one node per line.
pub fn tree(doc: &Document) -> String {
    let mut out = String::new();
    for block in doc {
        match block {
            Block::Heading { level, content } => {
                let _ = writeln!(out, "heading {level}");
                tree_spans(&mut out, content, 1);
            }
            Block::Paragraph { content } => {
                out.push_str("paragraph\n");
                tree_spans(&mut out, content, 1);
            }
            Block::CodeBlock { language, lines } => {
                if language.is_empty() {
                    out.push_str("code_block\n");
                } else {
                    let _ = writeln!(out, "code_block {language}");
                }
                for line in lines {
                    let _ = writeln!(out, "  | {line}");
                }
            }
            Block::List { items } => {
                out.push_str("list\n");
                for item in items {
                    out.push_str("  item\n");
                    tree_spans(&mut out, item, 2);
                }
            }
        }
    }
    out
}

fn tree_spans(out: &mut String, spans: &[Inline], depth: usize) {
    let indent = "  ".repeat(depth);
    for span in spans {
        let kind = match span {
            Inline::Text(_) => "text",
            Inline::Code(_) => "code",
            Inline::Bold(_) => "bold",
            Inline::Italic(_) => "italic",
        };
        let _ = writeln!(out, "{indent}{kind} {:?}", span.text());
    }
}

pub fn json(doc: &Document, pretty: bool) -> Result<String> {
    let mut out = if pretty {
        serde_json::to_string_pretty(doc)?
    } else {
        serde_json::to_string(doc)?
    };
    out.push('\n');
    Ok(out)
}

/// Minimal semantic HTML. Text is escaped; nothing is styled.
pub fn html(doc: &Document) -> String {
    let mut out = String::new();
    for block in doc {
        match block {
            Block::Heading { level, content } => {
                let _ = write!(out, "<h{level}>");
                html_spans(&mut out, content);
                let _ = writeln!(out, "</h{level}>");
            }
            Block::Paragraph { content } => {
                out.push_str("<p>");
                html_spans(&mut out, content);
                out.push_str("</p>\n");
            }
            Block::CodeBlock { language, lines } => {
                if language.is_empty() {
                    out.push_str("<pre><code>");
                } else {
                    let _ = write!(
                        out,
                        "<pre><code class=\"language-{}\">",
                        html_escape::encode_double_quoted_attribute(language)
                    );
                }
                out.push_str(&html_escape::encode_text(&lines.join("\n")));
                out.push_str("</code></pre>\n");
            }
            Block::List { items } => {
                out.push_str("<ul>\n");
                for item in items {
                    out.push_str("<li>");
                    html_spans(&mut out, item);
                    out.push_str("</li>\n");
                }
                out.push_str("</ul>\n");
            }
        }
    }
    out
}

fn html_spans(out: &mut String, spans: &[Inline]) {
    for span in spans {
        let text = html_escape::encode_text(span.text());
        match span {
            Inline::Text(_) => out.push_str(&text),
            Inline::Code(_) => {
                let _ = write!(out, "<code>{text}</code>");
            }
            Inline::Bold(_) => {
                let _ = write!(out, "<strong>{text}</strong>");
            }
            Inline::Italic(_) => {
                let _ = write!(out, "<em>{text}</em>");
            }
        }
    }
}
