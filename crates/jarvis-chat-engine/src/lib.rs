//! Formatting engine for JARVIS chat responses.
//!
//! Assistant replies are markdown-like prose interleaved with typed fenced blocks
//! (`email_report`, `pause_list`, `budget_table`). [`parsing::parse_message`] turns a
//! reply into an ordered sequence of typed blocks, and [`email::to_email_text`]
//! renders the same blocks as copy-paste-ready plain text.

pub mod email;
pub mod export;
pub mod parsing;

// Re-export key types for easier usage
pub use email::{render_blocks, to_email_text};
pub use parsing::{
    ParsedMessage,
    blocks::{Block, BlockNode, ListKind},
    fences::{BudgetRow, EmailReport, PauseItem},
    inline::Span,
    parse_message,
};
