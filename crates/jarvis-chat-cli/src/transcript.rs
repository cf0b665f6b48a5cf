//! Turns conversation messages into styled terminal lines.
//!
//! User turns are shown verbatim. Assistant turns go through the block
//! formatter so cards and tables render the same way every time.

use jarvis_chat_engine::{
    Block, BudgetRow, PauseItem, Span as InlineSpan, parse_message,
};
use jarvis_chat_session::{Message, Role};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const RULE_WIDTH: usize = 40;

fn header_style(level: u8) -> Style {
    let color = match level {
        1 => Color::Cyan,
        2 => Color::LightBlue,
        _ => Color::Blue,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn card_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
    ))
}

fn dim(text: String) -> Span<'static> {
    Span::styled(text, Style::default().fg(Color::DarkGray))
}

/// Styled spans for one run of inline markdown.
pub fn inline_spans(spans: &[InlineSpan]) -> Vec<Span<'static>> {
    spans
        .iter()
        .map(|span| match span {
            InlineSpan::Text(text) => Span::raw(text.clone()),
            InlineSpan::Bold(text) => {
                Span::styled(text.clone(), Style::default().add_modifier(Modifier::BOLD))
            }
            InlineSpan::Italic(text) => {
                Span::styled(text.clone(), Style::default().add_modifier(Modifier::ITALIC))
            }
            InlineSpan::Code(text) => Span::styled(text.clone(), Style::default().fg(Color::Yellow)),
        })
        .collect()
}

fn prefixed(prefix: String, spans: &[InlineSpan]) -> Line<'static> {
    let mut out = vec![Span::raw(prefix)];
    out.extend(inline_spans(spans));
    Line::from(out)
}

/// Lines for one message, starting with a role header.
pub fn message_lines(message: &Message) -> Vec<Line<'static>> {
    let time = message.created_at.format("%H:%M").to_string();
    let mut lines = vec![match message.role {
        Role::User => Line::from(vec![
            Span::styled("You", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            dim(format!(" {time}")),
        ]),
        Role::Assistant => {
            let mut header = vec![
                Span::styled("JARVIS", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
                dim(format!(" {time}")),
            ];
            if let Some(source) = &message.data_source {
                header.push(dim(format!(" [{source}]")));
            }
            Line::from(header)
        }
    }];

    match message.role {
        Role::User => lines.extend(message.content.lines().map(|l| Line::from(l.to_string()))),
        Role::Assistant => lines.extend(assistant_lines(&message.content)),
    }
    lines.push(Line::default());
    lines
}

/// Lines for an assistant reply, one block at a time.
pub fn assistant_lines(content: &str) -> Vec<Line<'static>> {
    let parsed = parse_message(content);
    let mut lines = Vec::new();
    for block in parsed.iter_blocks() {
        block_lines(block, &mut lines);
    }
    lines
}

fn block_lines(block: &Block, out: &mut Vec<Line<'static>>) {
    match block {
        Block::Heading { level, spans } => {
            let style = header_style(*level);
            out.push(Line::from(
                inline_spans(spans)
                    .into_iter()
                    .map(|span| span.patch_style(style))
                    .collect::<Vec<_>>(),
            ));
        }
        Block::Paragraph { spans } => out.push(Line::from(inline_spans(spans))),
        Block::List { kind, items } => {
            for (i, item) in items.iter().enumerate() {
                let marker = match kind.item_number(i) {
                    None => "  • ".to_string(),
                    Some(n) => format!("  {n}. "),
                };
                out.push(prefixed(marker, item));
            }
        }
        Block::HorizontalRule => out.push(Line::from(dim("─".repeat(RULE_WIDTH)))),
        Block::Table { headers, rows } => {
            let bold = Style::default().add_modifier(Modifier::BOLD);
            out.push(Line::from(Span::styled(headers.join(" │ "), bold)));
            for row in rows {
                let mut line = Vec::new();
                for (i, cell) in row.iter().enumerate() {
                    if i > 0 {
                        line.push(dim(" │ ".to_string()));
                    }
                    line.extend(inline_spans(cell));
                }
                out.push(Line::from(line));
            }
        }
        Block::CodeBlock {
            language,
            raw_lines,
        } => {
            if let Some(language) = language {
                out.push(Line::from(dim(format!("[{language}]"))));
            }
            let code = Style::default().fg(Color::Yellow);
            out.extend(
                raw_lines
                    .iter()
                    .map(|l| Line::from(Span::styled(format!("  {l}"), code))),
            );
        }
        Block::EmailReportCard { subject, body, .. } => {
            out.push(card_title("✉ Email report"));
            if let Some(subject) = subject {
                out.push(Line::from(vec![
                    Span::styled("Subject: ", Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(subject.clone()),
                ]));
            }
            out.extend(body.lines().map(|l| Line::from(l.to_string())));
        }
        Block::PauseListCard { items } => pause_card(items, out),
        Block::BudgetTableCard { rows } => budget_card(rows, out),
        Block::Spacer => out.push(Line::default()),
    }
}

fn pause_card(items: &[PauseItem], out: &mut Vec<Line<'static>>) {
    out.push(card_title(&format!("⏸ Pause recommendations ({})", items.len())));
    for (i, item) in items.iter().enumerate() {
        out.push(Line::from(vec![
            Span::styled(format!("{}. ", i + 1), Style::default().fg(Color::Magenta)),
            Span::styled(item.ad_name.clone(), Style::default().add_modifier(Modifier::BOLD)),
        ]));
        out.push(Line::from(dim(format!("   {} › {}", item.campaign, item.adset))));

        let mut metrics = format!("   ${:.2} spent · {} leads", item.spend_30d, item.leads_30d);
        if let Some(cpl) = item.cpl_30d {
            metrics.push_str(&format!(" · ${cpl:.2} CPL"));
        }
        if let Some(days) = item.days_running {
            metrics.push_str(&format!(" · {days}d running"));
        }
        out.push(Line::from(metrics));
        out.push(Line::from(Span::styled(
            format!("   {}", item.reason),
            Style::default().add_modifier(Modifier::ITALIC),
        )));
    }
}

fn budget_card(rows: &[BudgetRow], out: &mut Vec<Line<'static>>) {
    out.push(card_title("$ Budget allocation"));
    for row in rows {
        let delta_color = if row.delta.trim_start().starts_with('-') {
            Color::Red
        } else {
            Color::Green
        };
        out.push(Line::from(vec![
            Span::styled(
                format!("{} ", row.campaign_tactic),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            dim(format!("({})", row.platform)),
        ]));
        out.push(Line::from(vec![
            Span::raw(format!("   {} → {} ", row.current_spend, row.recommended_spend)),
            Span::styled(row.delta.clone(), Style::default().fg(delta_color)),
        ]));
        out.push(Line::from(dim(format!("   {}", row.reasoning))));
    }
}
