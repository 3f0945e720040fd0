/// ATX heading, levels 1 to 3.
pub struct Heading;

impl Heading {
    /// Markers paired with their level, longest first so `### ` is never read
    /// as `# ` followed by `## `.
    pub const MARKERS: [(&'static str, u8); 3] = [("### ", 3), ("## ", 2), ("# ", 1)];

    /// Returns `(level, rest_of_line)` if the line opens a heading.
    pub fn open(line: &str) -> Option<(u8, &str)> {
        Self::MARKERS
            .iter()
            .find_map(|&(marker, level)| line.strip_prefix(marker).map(|rest| (level, rest)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# one", Some((1, "one")))]
    #[case("## two", Some((2, "two")))]
    #[case("### three", Some((3, "three")))]
    #[case("###  spaced", Some((3, " spaced")))]
    #[case("# ", Some((1, "")))]
    #[case("#### four", None)]
    #[case("#nospace", None)]
    #[case(" # indented", None)]
    #[case("plain", None)]
    fn heading_markers(#[case] line: &str, #[case] expected: Option<(u8, &str)>) {
        assert_eq!(Heading::open(line), expected);
    }
}
