pub mod blocks;
pub mod fences;
pub mod inline;
pub mod invariants;
pub mod lines;

#[cfg(test)]
mod tests;

use serde::Serialize;

use blocks::{BlockBuilder, BlockNode, LineClass, MarkdownLineClassifier};
use lines::lines_with_index;

/// The block sequence of one assistant message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedMessage {
    pub blocks: Vec<BlockNode>,
    /// Number of source lines the blocks partition.
    pub line_count: usize,
}

impl ParsedMessage {
    /// Iterates the blocks without their line ranges.
    pub fn iter_blocks(&self) -> impl Iterator<Item = &blocks::Block> {
        self.blocks.iter().map(|node| &node.block)
    }
}

/// Formats a message into blocks in a single left-to-right pass.
///
/// Total over all inputs: a line no detector claims becomes a paragraph.
pub fn parse_message(text: &str) -> ParsedMessage {
    let classifier = MarkdownLineClassifier;
    let classes: Vec<LineClass<'_>> = lines_with_index(text)
        .iter()
        .map(|lr| classifier.classify(lr))
        .collect();

    let mut builder = BlockBuilder::new();
    for (i, lc) in classes.iter().enumerate() {
        builder.push(lc, classes.get(i + 1));
    }

    ParsedMessage {
        blocks: builder.finish(),
        line_count: classes.len(),
    }
}
