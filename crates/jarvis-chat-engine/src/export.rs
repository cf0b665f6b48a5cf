//! Budget table exports: a GitHub markdown table and a CSV attachment.

use crate::parsing::{ParsedMessage, blocks::Block, fences::BudgetRow};

const NO_DATA_MARKDOWN: &str = "_No data available._";
const NO_DATA_CSV: &str = "No data available";

/// Rows of the first budget table card in a message, if any.
pub fn budget_rows(parsed: &ParsedMessage) -> Option<&[BudgetRow]> {
    parsed.iter_blocks().find_map(|block| match block {
        Block::BudgetTableCard { rows } => Some(rows.as_slice()),
        _ => None,
    })
}

/// Renders rows as a GitHub-flavored markdown table.
pub fn markdown_table(rows: &[BudgetRow]) -> String {
    if rows.is_empty() {
        return NO_DATA_MARKDOWN.to_string();
    }
    let mut lines = vec![
        format!("| {} |", BudgetRow::COLUMNS.join(" | ")),
        format!("| {} |", vec!["---"; BudgetRow::COLUMNS.len()].join(" | ")),
    ];
    lines.extend(
        rows.iter()
            .map(|row| format!("| {} |", row.values().join(" | "))),
    );
    lines.join("\n")
}

/// Renders rows as CSV with a header line. Lines end with `\r\n`.
pub fn csv(rows: &[BudgetRow]) -> String {
    if rows.is_empty() {
        return NO_DATA_CSV.to_string();
    }
    let mut out = String::new();
    push_record(&mut out, BudgetRow::COLUMNS);
    for row in rows {
        push_record(&mut out, row.values());
    }
    out
}

fn push_record(out: &mut String, fields: [&str; 6]) {
    let record: Vec<String> = fields.iter().map(|f| csv_field(f)).collect();
    out.push_str(&record.join(","));
    out.push_str("\r\n");
}

/// Quotes a field when it contains a delimiter, quote or line break.
fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
