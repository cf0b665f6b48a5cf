use crate::parsing::lines::LineRef;

use super::kinds::{CodeFence, Heading, ListItem, Table, ThematicBreak};

/// What a line looks like on its own, in detector order.
///
/// Table rows are not a `LineKind`: recognising a table header needs the next
/// line, so the builder decides that from `has_pipe` and `is_table_separator`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    FenceOpen { tag: &'a str },
    Heading { level: u8, text: &'a str },
    ThematicBreak,
    UnorderedItem { text: &'a str },
    OrderedItem { number: u64, text: &'a str },
    Blank,
    Text,
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone)]
pub struct LineClass<'a> {
    /// Zero-based line index.
    pub index: usize,
    /// The line as written, indentation included.
    pub raw: &'a str,
    /// The line with surrounding whitespace removed.
    pub trimmed: &'a str,
    pub kind: LineKind<'a>,
    /// Whether the line contains a `|`.
    pub has_pipe: bool,
    /// Whether the line has the shape of a table separator row.
    pub is_table_separator: bool,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    pub fn classify<'a>(&self, lr: &LineRef<'a>) -> LineClass<'a> {
        let trimmed = lr.text.trim();
        LineClass {
            index: lr.index,
            raw: lr.text,
            trimmed,
            kind: Self::kind(trimmed),
            has_pipe: trimmed.contains(Table::PIPE),
            is_table_separator: Table::is_separator(trimmed),
        }
    }

    fn kind(trimmed: &str) -> LineKind<'_> {
        if let Some(tag) = CodeFence::open_tag(trimmed) {
            return LineKind::FenceOpen { tag };
        }
        if let Some((level, text)) = Heading::detect(trimmed) {
            return LineKind::Heading { level, text };
        }
        if ThematicBreak::matches(trimmed) {
            return LineKind::ThematicBreak;
        }
        if let Some(text) = ListItem::unordered(trimmed) {
            return LineKind::UnorderedItem { text };
        }
        if let Some((number, text)) = ListItem::ordered(trimmed) {
            return LineKind::OrderedItem { number, text };
        }
        if trimmed.is_empty() {
            return LineKind::Blank;
        }
        LineKind::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn classify(text: &str) -> LineClass<'_> {
        MarkdownLineClassifier.classify(&LineRef { index: 0, text })
    }

    #[rstest]
    #[case("```budget_table", LineKind::FenceOpen { tag: "budget_table" })]
    #[case("  ## Summary  ", LineKind::Heading { level: 2, text: "Summary" })]
    #[case("***", LineKind::ThematicBreak)]
    #[case("* item", LineKind::UnorderedItem { text: "item" })]
    #[case("3. third", LineKind::OrderedItem { number: 3, text: "third" })]
    #[case("   ", LineKind::Blank)]
    #[case("Just text", LineKind::Text)]
    fn line_kinds(#[case] line: &str, #[case] expected: LineKind<'static>) {
        assert_eq!(classify(line).kind, expected);
    }

    #[test]
    fn rule_wins_over_bullet() {
        assert_eq!(classify("- - -").kind, LineKind::UnorderedItem { text: "- -" });
        assert_eq!(classify("---").kind, LineKind::ThematicBreak);
    }

    #[test]
    fn table_facts() {
        let header = classify("| Platform | Spend |");
        assert!(header.has_pipe);
        assert!(!header.is_table_separator);

        let sep = classify("|---|---|");
        assert!(sep.is_table_separator);
    }

    #[test]
    fn raw_keeps_indentation() {
        let c = classify("    indented");
        assert_eq!(c.raw, "    indented");
        assert_eq!(c.trimmed, "indented");
    }
}
