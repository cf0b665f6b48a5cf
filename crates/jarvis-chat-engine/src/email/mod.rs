//! # Email Text
//!
//! Renders formatter output as plain text that pastes cleanly into an email
//! client. This is a pure `Block -> text` pass over the same block sequence the
//! chat view shows, so both views always agree on structure.
//!
//! - headings: `#`/`##` upper-cased and underlined, `###` unchanged
//! - lists: `• item` or `n. item`, inline markdown stripped
//! - `email_report`: injected verbatim
//! - `pause_list` / `budget_table`: numbered or bulleted plain-text summaries
//! - code blocks, including payloads that failed to parse: dropped
//! - rules and spacers: a blank line

mod cards;

use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::{
    blocks::{Block, BlockNode},
    fences::EmailReport,
    inline::{Span, plain_text, strip_inline},
    parse_message,
};

/// Width cap of the `═` rule under a `#` heading.
pub const H1_RULE_MAX: usize = 60;
/// Width cap of the `─` rule under a `##` heading.
pub const H2_RULE_MAX: usize = 50;

/// Converts a raw assistant message to email-ready plain text.
pub fn to_email_text(raw: &str) -> String {
    render_blocks(&parse_message(raw).blocks)
}

/// Renders a block sequence as plain text.
pub fn render_blocks(blocks: &[BlockNode]) -> String {
    let mut out = vec![];
    for node in blocks {
        render_block(&node.block, &mut out);
    }
    collapse_blank_runs(&out.join("\n")).trim().to_string()
}

fn render_block(block: &Block, out: &mut Vec<String>) {
    match block {
        Block::Heading { level, spans } => {
            let text = inline_text(spans);
            match level {
                1 => underline(out, text.to_uppercase(), '═', H1_RULE_MAX),
                2 => underline(out, text.to_uppercase(), '─', H2_RULE_MAX),
                _ => out.push(text),
            }
        }
        Block::Paragraph { spans } => out.push(inline_text(spans)),
        Block::List { kind, items } => {
            for (i, item) in items.iter().enumerate() {
                let text = inline_text(item);
                out.push(match kind.item_number(i) {
                    None => format!("• {text}"),
                    Some(n) => format!("{n}. {text}"),
                });
            }
        }
        Block::Table { headers, rows } => {
            out.push(headers.join(" | "));
            for row in rows {
                let cells: Vec<String> = row.iter().map(|cell| inline_text(cell)).collect();
                out.push(cells.join(" | "));
            }
        }
        Block::EmailReportCard {
            subject,
            subject_line,
            body,
        } => out.push(
            EmailReport {
                subject: subject.clone(),
                subject_line: subject_line.clone(),
                body: body.clone(),
            }
            .to_plain_text(),
        ),
        Block::PauseListCard { items } => cards::pause_list(items, out),
        Block::BudgetTableCard { rows } => cards::budget_table(rows, out),
        Block::CodeBlock { .. } => {}
        Block::HorizontalRule | Block::Spacer => out.push(String::new()),
    }
}

fn inline_text(spans: &[Span]) -> String {
    strip_inline(&plain_text(spans))
}

fn underline(out: &mut Vec<String>, text: String, rule: char, max: usize) {
    let width = (text.chars().count() + 4).min(max);
    out.push(text);
    out.push(rule.to_string().repeat(width));
}

/// Collapses any run of three or more newlines to exactly two.
fn collapse_blank_runs(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n{3,}").expect("Invalid blank run regex"))
        .replace_all(s, "\n\n")
        .into_owned()
}
