/// ATX heading, levels 1 to 3.
pub struct Heading;

impl Heading {
    /// Longest prefix first so `### x` is never read as `# ## x`.
    pub const PREFIXES: [(&'static str, u8); 3] = [("### ", 3), ("## ", 2), ("# ", 1)];

    /// Returns the heading level and its text.
    pub fn detect(trimmed: &str) -> Option<(u8, &str)> {
        Self::PREFIXES.iter().find_map(|(prefix, level)| {
            trimmed
                .strip_prefix(*prefix)
                .map(|text| (*level, text.trim()))
        })
    }
}
