use serde::Serialize;

use crate::parsing::{
    fences::{BudgetRow, PauseItem},
    inline::Span,
    lines::LineRange,
};

/// One table cell: the inline spans of its text.
pub type Cell = Vec<Span>;

/// Whether a list is bulleted or numbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ListKind {
    Unordered,
    /// Numbered list; `start` is the number written on its first item.
    Ordered { start: u64 },
}

impl ListKind {
    pub fn is_ordered(self) -> bool {
        matches!(self, ListKind::Ordered { .. })
    }

    /// Two list kinds belong in the same group regardless of start number.
    pub fn same_group(self, other: ListKind) -> bool {
        self.is_ordered() == other.is_ordered()
    }

    /// Number shown on the `index`-th item of an ordered list, saturating at `u64::MAX`.
    pub fn item_number(self, index: usize) -> Option<u64> {
        match self {
            ListKind::Unordered => None,
            ListKind::Ordered { start } => {
                Some(start.saturating_add(u64::try_from(index).unwrap_or(u64::MAX)))
            }
        }
    }
}

/// A typed unit of rendered chat output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// `#`, `##` or `###` heading (level 1..=3).
    Heading { level: u8, spans: Vec<Span> },
    /// Any line no other detector claims.
    Paragraph { spans: Vec<Span> },
    /// Consecutive list items of one kind.
    List { kind: ListKind, items: Vec<Vec<Span>> },
    HorizontalRule,
    /// GitHub-style pipe table. Separator rows are not kept.
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<Cell>>,
    },
    /// Fenced block without a specialised card, or a card whose payload failed to parse.
    CodeBlock {
        language: Option<String>,
        raw_lines: Vec<String>,
    },
    /// ```` ```email_report ```` fence.
    EmailReportCard {
        subject: Option<String>,
        /// The payload's first line exactly as written, when it is the subject line.
        subject_line: Option<String>,
        body: String,
    },
    /// ```` ```pause_list ```` fence with a valid JSON payload.
    PauseListCard { items: Vec<PauseItem> },
    /// ```` ```budget_table ```` fence with a valid JSON payload.
    BudgetTableCard { rows: Vec<BudgetRow> },
    /// A collapsed run of blank lines.
    Spacer,
}

impl Block {
    /// Short variant name, used in logs and debug output.
    pub fn name(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "Heading",
            Block::Paragraph { .. } => "Paragraph",
            Block::List { .. } => "List",
            Block::HorizontalRule => "HorizontalRule",
            Block::Table { .. } => "Table",
            Block::CodeBlock { .. } => "CodeBlock",
            Block::EmailReportCard { .. } => "EmailReportCard",
            Block::PauseListCard { .. } => "PauseListCard",
            Block::BudgetTableCard { .. } => "BudgetTableCard",
            Block::Spacer => "Spacer",
        }
    }
}

/// A block together with the source lines it was built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockNode {
    pub block: Block,
    pub lines: LineRange,
}
