//! # Fenced Payloads
//!
//! Fenced blocks carry structured payloads from the backend. The opening fence's
//! tag selects a payload parser; anything unrecognised, and any payload that fails
//! to parse, is shown as a plain code block. Parse failures are never surfaced.

pub mod budget_table;
pub mod email_report;
pub mod pause_list;

use thiserror::Error;

use super::blocks::Block;

pub use budget_table::BudgetRow;
pub use email_report::EmailReport;
pub use pause_list::PauseItem;

/// Why a JSON payload could not be turned into a card.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("payload is empty")]
    Empty,
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses a JSON array payload into typed records.
pub(crate) fn parse_json_array<T: serde::de::DeserializeOwned>(
    payload: &str,
) -> Result<Vec<T>, PayloadError> {
    if payload.trim().is_empty() {
        return Err(PayloadError::Empty);
    }
    Ok(serde_json::from_str(payload)?)
}

/// The kind of a fenced block, chosen by its tag (case-insensitive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenceTag {
    EmailReport,
    PauseList,
    BudgetTable,
    /// Any other tag, kept as written.
    Other(String),
    /// Bare fence.
    None,
}

impl FenceTag {
    pub const EMAIL_REPORT: &'static str = "email_report";
    pub const PAUSE_LIST: &'static str = "pause_list";
    pub const BUDGET_TABLE: &'static str = "budget_table";

    pub fn parse(tag: &str) -> Self {
        let tag = tag.trim();
        if tag.is_empty() {
            return FenceTag::None;
        }
        match tag.to_ascii_lowercase().as_str() {
            Self::EMAIL_REPORT => FenceTag::EmailReport,
            Self::PAUSE_LIST => FenceTag::PauseList,
            Self::BUDGET_TABLE => FenceTag::BudgetTable,
            _ => FenceTag::Other(tag.to_string()),
        }
    }

    /// Label shown on a code block rendering of this fence.
    pub fn label(&self) -> Option<String> {
        match self {
            FenceTag::EmailReport => Some(Self::EMAIL_REPORT.to_string()),
            FenceTag::PauseList => Some(Self::PAUSE_LIST.to_string()),
            FenceTag::BudgetTable => Some(Self::BUDGET_TABLE.to_string()),
            FenceTag::Other(tag) => Some(tag.clone()),
            FenceTag::None => None,
        }
    }
}

/// Builds the block for a closed (or unterminated) fence.
pub fn fence_block(tag: &str, payload: Vec<String>) -> Block {
    let tag = FenceTag::parse(tag);
    match &tag {
        FenceTag::EmailReport => {
            let EmailReport {
                subject,
                subject_line,
                body,
            } = email_report::parse(&payload);
            Block::EmailReportCard {
                subject,
                subject_line,
                body,
            }
        }
        FenceTag::PauseList => match pause_list::parse(&payload.join("\n")) {
            Ok(items) => Block::PauseListCard { items },
            Err(err) => {
                log::debug!("pause_list payload rendered as code: {err}");
                code_block(&tag, payload)
            }
        },
        FenceTag::BudgetTable => match budget_table::parse(&payload.join("\n")) {
            Ok(rows) => Block::BudgetTableCard { rows },
            Err(err) => {
                log::debug!("budget_table payload rendered as code: {err}");
                code_block(&tag, payload)
            }
        },
        FenceTag::Other(_) | FenceTag::None => code_block(&tag, payload),
    }
}

fn code_block(tag: &FenceTag, raw_lines: Vec<String>) -> Block {
    Block::CodeBlock {
        language: tag.label(),
        raw_lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tags_are_case_insensitive() {
        assert_eq!(FenceTag::parse("PAUSE_LIST"), FenceTag::PauseList);
        assert_eq!(FenceTag::parse("Budget_Table"), FenceTag::BudgetTable);
        assert_eq!(FenceTag::parse("email_report"), FenceTag::EmailReport);
        assert_eq!(FenceTag::parse("Rust"), FenceTag::Other("Rust".into()));
        assert_eq!(FenceTag::parse(""), FenceTag::None);
    }

    #[test]
    fn bad_pause_list_falls_back_to_code() {
        let block = fence_block("pause_list", vec!["{not valid json".into()]);
        assert_eq!(
            block,
            Block::CodeBlock {
                language: Some("pause_list".into()),
                raw_lines: vec!["{not valid json".into()],
            }
        );
    }

    #[test]
    fn empty_budget_table_falls_back_to_code() {
        let block = fence_block("budget_table", vec![]);
        assert_eq!(
            block,
            Block::CodeBlock {
                language: Some("budget_table".into()),
                raw_lines: vec![],
            }
        );
    }

    #[test]
    fn json_object_is_not_a_pause_list() {
        let block = fence_block("pause_list", vec![r#"{"ad_name": "x"}"#.into()]);
        assert_eq!(block.name(), "CodeBlock");
    }

    #[test]
    fn other_tags_keep_their_label() {
        let block = fence_block("SQL", vec!["select 1;".into()]);
        assert_eq!(
            block,
            Block::CodeBlock {
                language: Some("SQL".into()),
                raw_lines: vec!["select 1;".into()],
            }
        );
        let bare = fence_block("", vec![]);
        assert_eq!(
            bare,
            Block::CodeBlock {
                language: None,
                raw_lines: vec![],
            }
        );
    }
}
