/// What a fence line says about itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceSig<'a> {
    /// Text after the marker, trimmed. On an opening fence this is the
    /// language tag; on a closing fence it is ignored.
    pub info: &'a str,
}

/// Fenced code block with owned delimiter constant.
///
/// Fences are raw zones: lines between an opening and a closing fence are
/// never classified or inline-parsed.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns the fence signature if the line, ignoring leading whitespace,
    /// starts with the fence marker.
    pub fn sig(line: &str) -> Option<FenceSig<'_>> {
        let rest = line.trim_start().strip_prefix(Self::BACKTICKS)?;
        Some(FenceSig { info: rest.trim() })
    }
}
