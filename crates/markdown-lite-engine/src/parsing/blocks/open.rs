use super::{
    classify::LineClass,
    kinds::{BulletList, Heading},
};

/// A block that a single line can open outside a fence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOpen<'a> {
    FencedCode { language: &'a str },
    Heading { level: u8, text: &'a str },
    ListItem { text: &'a str },
}

/// Detects a block opener on a non-blank line outside a fence.
pub fn try_open_leaf<'a>(c: &LineClass<'a>) -> Option<BlockOpen<'a>> {
    // Precedence: fence, then heading, then bullet.
    if let Some(sig) = c.fence_sig {
        return Some(BlockOpen::FencedCode { language: sig.info });
    }
    if let Some((level, text)) = Heading::open(c.text) {
        return Some(BlockOpen::Heading { level, text });
    }
    BulletList::item(c.text).map(|text| BlockOpen::ListItem { text })
}
