use crate::parsing::{
    fences,
    inline::{Span, parse_inline},
    lines::LineRange,
};

use super::{
    classify::{LineClass, LineKind},
    kinds::{CodeFence, Table},
    types::{Block, BlockNode, Cell, ListKind},
};

/// A multi-line block that is still collecting lines.
#[derive(Debug)]
enum OpenState {
    None,
    List {
        kind: ListKind,
        items: Vec<Vec<Span>>,
        lines: LineRange,
    },
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<Cell>>,
        lines: LineRange,
    },
    Fence {
        tag: String,
        payload: Vec<String>,
        lines: LineRange,
    },
}

/// Builds the block sequence of a message from classified lines.
///
/// Lines must be pushed in order. `next` is the classification of the
/// following line, used only to recognise table headers.
pub struct BlockBuilder {
    open: OpenState,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            open: OpenState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'_>, next: Option<&LineClass<'_>>) {
        if self.in_fence() {
            self.consume_fence_line(c);
            return;
        }

        if self.in_table() {
            if c.has_pipe || c.is_table_separator {
                self.extend_table(c);
                return;
            }
            self.flush_open();
        }

        if let LineKind::FenceOpen { tag } = c.kind {
            self.flush_open();
            self.open = OpenState::Fence {
                tag: tag.to_string(),
                payload: vec![],
                lines: LineRange::single(c.index),
            };
            return;
        }

        if c.has_pipe && next.is_some_and(|n| n.is_table_separator) {
            self.flush_open();
            self.open = OpenState::Table {
                headers: Table::headers(c.trimmed),
                rows: vec![],
                lines: LineRange::single(c.index),
            };
            return;
        }

        match c.kind {
            LineKind::Heading { level, text } => self.emit(
                Block::Heading {
                    level,
                    spans: parse_inline(text),
                },
                c.index,
            ),
            LineKind::ThematicBreak => self.emit(Block::HorizontalRule, c.index),
            LineKind::UnorderedItem { text } => {
                self.push_list_item(ListKind::Unordered, text, c.index)
            }
            LineKind::OrderedItem { number, text } => {
                self.push_list_item(ListKind::Ordered { start: number }, text, c.index)
            }
            LineKind::Blank => self.push_blank(c.index),
            LineKind::Text | LineKind::FenceOpen { .. } => self.emit(
                Block::Paragraph {
                    spans: parse_inline(c.trimmed),
                },
                c.index,
            ),
        }
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF flush; an unterminated fence is still emitted.
        self.flush_open();
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.open, OpenState::Fence { .. })
    }

    fn in_table(&self) -> bool {
        matches!(self.open, OpenState::Table { .. })
    }

    /// Emits a single-line block, closing any open list first.
    fn emit(&mut self, block: Block, index: usize) {
        self.flush_open();
        self.out.push(BlockNode {
            block,
            lines: LineRange::single(index),
        });
    }

    fn consume_fence_line(&mut self, c: &LineClass<'_>) {
        let OpenState::Fence { payload, lines, .. } = &mut self.open else {
            return;
        };
        lines.end = c.index + 1;
        if CodeFence::closes(c.raw) {
            self.flush_open();
        } else {
            payload.push(c.raw.to_string());
        }
    }

    fn extend_table(&mut self, c: &LineClass<'_>) {
        let OpenState::Table { rows, lines, .. } = &mut self.open else {
            return;
        };
        lines.end = c.index + 1;
        if !c.is_table_separator {
            rows.push(Table::cells(c.trimmed));
        }
    }

    fn push_list_item(&mut self, kind: ListKind, text: &str, index: usize) {
        if let OpenState::List {
            kind: open_kind,
            items,
            lines,
        } = &mut self.open
            && open_kind.same_group(kind)
        {
            items.push(parse_inline(text));
            lines.end = index + 1;
            return;
        }
        self.flush_open();
        self.open = OpenState::List {
            kind,
            items: vec![parse_inline(text)],
            lines: LineRange::single(index),
        };
    }

    /// Blank lines extend a directly preceding spacer instead of starting a new one.
    fn push_blank(&mut self, index: usize) {
        self.flush_open();
        if let Some(last) = self.out.last_mut()
            && matches!(last.block, Block::Spacer)
            && last.lines.end == index
        {
            last.lines.end = index + 1;
            return;
        }
        self.out.push(BlockNode {
            block: Block::Spacer,
            lines: LineRange::single(index),
        });
    }

    fn flush_open(&mut self) {
        let node = match std::mem::replace(&mut self.open, OpenState::None) {
            OpenState::None => return,
            OpenState::List { kind, items, lines } => BlockNode {
                block: Block::List { kind, items },
                lines,
            },
            OpenState::Table {
                headers,
                rows,
                lines,
            } => BlockNode {
                block: Block::Table { headers, rows },
                lines,
            },
            OpenState::Fence {
                tag,
                payload,
                lines,
            } => BlockNode {
                block: fences::fence_block(&tag, payload),
                lines,
            },
        };
        self.out.push(node);
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
