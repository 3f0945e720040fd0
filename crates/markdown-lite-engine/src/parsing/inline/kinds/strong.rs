/// Strong emphasis, written `**text**`.
pub struct Strong;

impl Strong {
    pub const DELIM: &'static str = "**";
    /// Byte the content may not contain.
    pub const STAR: u8 = b'*';
}
