use std::sync::OnceLock;

use regex::Regex;

/// Horizontal rule: three or more of a single character out of `-`, `*`, `_`.
pub struct ThematicBreak;

impl ThematicBreak {
    pub fn matches(trimmed: &str) -> bool {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"^(?:-{3,}|\*{3,}|_{3,})$").expect("Invalid thematic break regex")
        })
        .is_match(trimmed)
    }
}
