/// Flat bullet list. Items are single lines; there is no nesting.
pub struct BulletList;

impl BulletList {
    pub const MARKERS: [char; 2] = ['-', '*'];

    /// Returns the item text if the line starts with a bullet marker followed
    /// by one whitespace character. Both are stripped; anything after them,
    /// further whitespace included, is item text.
    pub fn item(line: &str) -> Option<&str> {
        let mut chars = line.chars();
        let marker = chars.next().filter(|c| Self::MARKERS.contains(c))?;
        let gap = chars.next().filter(|c| c.is_whitespace())?;
        Some(&line[marker.len_utf8() + gap.len_utf8()..])
    }
}
