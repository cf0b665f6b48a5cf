//! Runtime checks for formatter correctness, used by tests and benches.

use super::{ParsedMessage, blocks::Block};

/// Asserts that block line ranges partition `0..line_count` in order and that
/// no two spacers are adjacent.
pub fn check(parsed: &ParsedMessage) {
    let mut expected_start = 0;
    for node in &parsed.blocks {
        assert_eq!(
            node.lines.start,
            expected_start,
            "{} block starts at line {} but line {} is unclaimed or claimed twice",
            node.block.name(),
            node.lines.start,
            expected_start
        );
        assert!(
            !node.lines.is_empty(),
            "{} block claims no lines: {:?}",
            node.block.name(),
            node.lines
        );
        expected_start = node.lines.end;
    }
    assert_eq!(
        expected_start, parsed.line_count,
        "blocks end at line {expected_start}, input has {} lines",
        parsed.line_count
    );

    for pair in parsed.blocks.windows(2) {
        assert!(
            !(matches!(pair[0].block, Block::Spacer) && matches!(pair[1].block, Block::Spacer)),
            "adjacent spacers at lines {:?} and {:?}",
            pair[0].lines,
            pair[1].lines
        );
    }
}
