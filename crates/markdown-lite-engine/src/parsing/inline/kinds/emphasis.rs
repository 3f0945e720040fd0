/// Emphasis, written `*text*`.
///
/// Shares its delimiter byte with [`super::Strong`]; ambiguity between the
/// two is settled during candidate collection, where bold wins.
pub struct Emphasis;

impl Emphasis {
    pub const DELIM: &'static str = "*";
    pub const STAR: u8 = b'*';
}
