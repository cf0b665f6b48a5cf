pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// If `trimmed` opens a fence, returns the (possibly empty) tag after the backticks.
    pub fn open_tag(trimmed: &str) -> Option<&str> {
        trimmed.strip_prefix(Self::BACKTICKS).map(str::trim)
    }

    /// Any line starting with three backticks closes an open fence.
    pub fn closes(line: &str) -> bool {
        line.trim_start().starts_with(Self::BACKTICKS)
    }
}
