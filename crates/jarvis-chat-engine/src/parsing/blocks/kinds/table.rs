use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::inline::{parse_inline, strip_inline};

use super::super::types::Cell;

/// GitHub-flavored pipe table.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';

    /// A separator row holds only `-`, `|`, `:` and whitespace, and is not blank.
    pub fn is_separator(trimmed: &str) -> bool {
        static RE: OnceLock<Regex> = OnceLock::new();
        !trimmed.is_empty()
            && RE
                .get_or_init(|| Regex::new(r"^[\s|:-]+$").expect("Invalid table separator regex"))
                .is_match(trimmed)
    }

    /// Splits a row into trimmed cell texts, ignoring the outer pipes.
    pub fn split_row(trimmed: &str) -> Vec<&str> {
        let inner = trimmed.strip_prefix(Self::PIPE).unwrap_or(trimmed);
        let inner = inner.strip_suffix(Self::PIPE).unwrap_or(inner);
        inner.split(Self::PIPE).map(str::trim).collect()
    }

    /// Header cells as plain strings.
    pub fn headers(trimmed: &str) -> Vec<String> {
        Self::split_row(trimmed)
            .into_iter()
            .map(strip_inline)
            .collect()
    }

    /// Data cells with inline formatting.
    pub fn cells(trimmed: &str) -> Vec<Cell> {
        Self::split_row(trimmed)
            .into_iter()
            .map(parse_inline)
            .collect()
    }
}
