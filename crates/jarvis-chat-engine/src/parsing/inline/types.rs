use serde::Serialize;

/// An inline-formatted fragment of a line.
///
/// Spans own their text with the markup delimiters removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "style", content = "text", rename_all = "snake_case")]
pub enum Span {
    /// Plain text that isn't part of any special construct.
    Text(String),
    /// Text wrapped in `**`.
    Bold(String),
    /// Text wrapped in a single `*`.
    Italic(String),
    /// Text wrapped in backticks. No other formatting applies inside.
    Code(String),
}

impl Span {
    /// The span's text without markup.
    pub fn plain(&self) -> &str {
        match self {
            Span::Text(s) | Span::Bold(s) | Span::Italic(s) | Span::Code(s) => s,
        }
    }
}

/// Concatenates the plain text of a span sequence.
pub fn plain_text(spans: &[Span]) -> String {
    spans.iter().map(Span::plain).collect()
}
