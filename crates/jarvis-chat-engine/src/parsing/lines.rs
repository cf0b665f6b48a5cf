use serde::Serialize;

/// A half-open range `[start, end)` of source line indices.
///
/// Every block records the lines it was built from, so the block sequence of a
/// message can be checked to cover the input exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub struct LineRange {
    /// First line index (inclusive).
    pub start: usize,
    /// One past the last line index (exclusive).
    pub end: usize,
}

impl LineRange {
    /// A range covering exactly one line.
    pub fn single(index: usize) -> Self {
        Self {
            start: index,
            end: index + 1,
        }
    }

    /// Returns the number of lines. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the range claims no lines.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

/// A single source line with its index.
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    /// Zero-based line index.
    pub index: usize,
    /// The line text without its terminator.
    pub text: &'a str,
}

/// Splits a message into indexed lines.
///
/// Uses `str::lines`, so `\r\n` terminators are stripped and a trailing
/// newline does not produce an extra empty line.
pub fn lines_with_index(text: &str) -> Vec<LineRef<'_>> {
    text.lines()
        .enumerate()
        .map(|(index, text)| LineRef { index, text })
        .collect()
}
