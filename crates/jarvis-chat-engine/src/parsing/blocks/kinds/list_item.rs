use std::sync::OnceLock;

use regex::Regex;

/// List item markers.
pub struct ListItem;

impl ListItem {
    pub const BULLETS: [char; 3] = ['-', '*', '•'];

    /// `- text`, `* text` or `• text`; the marker must be followed by whitespace.
    pub fn unordered(trimmed: &str) -> Option<&str> {
        let mut chars = trimmed.chars();
        let marker = chars.next()?;
        if !Self::BULLETS.contains(&marker) {
            return None;
        }
        let rest = chars.as_str();
        rest.starts_with(char::is_whitespace)
            .then(|| rest.trim_start())
    }

    /// `12. text`, returning the number and the text.
    pub fn ordered(trimmed: &str) -> Option<(u64, &str)> {
        static RE: OnceLock<Regex> = OnceLock::new();
        let re = RE.get_or_init(|| {
            Regex::new(r"^(\d+)\.\s+(.*)$").expect("Invalid ordered list regex")
        });
        let caps = re.captures(trimmed)?;
        let number = caps[1].parse().unwrap_or(1);
        let text = caps.get(2).map_or("", |m| m.as_str());
        Some((number, text))
    }
}
