/// Markdown link `[text](url)`.
///
/// Links are not rendered as spans; plain-text output keeps the link text and
/// drops the URL.
pub struct Link;

impl Link {
    pub const PATTERN: &'static str = r"\[([^\]]+)\]\([^)]+\)";
}
