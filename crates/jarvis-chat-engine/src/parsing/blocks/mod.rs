//! # Block Formatting
//!
//! Two-phase block parsing of a chat message.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    holding local facts only (blank, fence opener, heading, list marker, pipes,
//!    separator-row shape)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` applies the detector order
//!    with one line of lookahead (for table separators) and emits `BlockNode`s
//!
//! ## Detector Order
//!
//! First match wins: fence opener, table (pipe + separator on the next line),
//! heading (`###` before `##` before `#`), horizontal rule, unordered item,
//! ordered item, blank, paragraph.
//!
//! ## Key Invariants
//!
//! - Fenced blocks are raw zones: no block/inline parsing inside
//! - Consecutive list items of one kind share a single `List` block
//! - A run of blank lines becomes exactly one `Spacer`
//! - Every source line belongs to exactly one block's `LineRange`

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineKind, MarkdownLineClassifier};
pub use types::{Block, BlockNode, Cell, ListKind};
