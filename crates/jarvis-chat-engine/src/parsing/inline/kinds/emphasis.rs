/// Bold and italic delimiters.
pub struct Emphasis;

impl Emphasis {
    /// Single star: italic.
    pub const STAR: u8 = b'*';
    /// Double star: bold.
    pub const STRONG: &'static [u8] = b"**";
}
