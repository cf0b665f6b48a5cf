/// A cursor for byte-by-byte inline parsing with position tracking.
///
/// All delimiters the inline parser looks for are ASCII, so any position where
/// a delimiter is found is also a valid `str` slice boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.byte_at(self.i)
    }

    /// Returns the byte at an absolute index.
    pub fn byte_at(&self, i: usize) -> Option<u8> {
        self.s.as_bytes().get(i).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s
            .as_bytes()
            .get(self.i..)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    /// Finds the first index `>= from` where `pat` occurs.
    pub fn find_from(&self, from: usize, pat: &[u8]) -> Option<usize> {
        let bytes = self.s.as_bytes();
        (from..bytes.len()).find(|&j| bytes[j..].starts_with(pat))
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Moves the cursor to an absolute byte index.
    pub fn jump_to(&mut self, i: usize) {
        self.i = i;
    }
}
