use std::sync::OnceLock;

use regex::Regex;

use super::kinds::Link;

fn bold_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").expect("Invalid bold regex"))
}

fn italic_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*(.+?)\*").expect("Invalid italic regex"))
}

fn code_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"`([^`]+)`").expect("Invalid code regex"))
}

fn link_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(Link::PATTERN).expect("Invalid link regex"))
}

/// Removes inline markdown, keeping the wrapped text.
///
/// Bold is stripped before italic, otherwise the single-star pattern would eat
/// one star of each `**` pair. Inline code and links follow.
pub fn strip_inline(s: &str) -> String {
    let s = bold_regex().replace_all(s, "$1");
    let s = italic_regex().replace_all(&s, "$1");
    let s = code_regex().replace_all(&s, "$1");
    strip_links(&s)
}

/// Replaces `[text](url)` with `text`.
pub fn strip_links(s: &str) -> String {
    link_regex().replace_all(s, "$1").into_owned()
}
