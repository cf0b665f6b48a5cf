//! Integration tests for the parsing module.
//!
//! Fixtures (.md) are co-located in `fixtures/`; every fixture must satisfy the
//! partition invariant in addition to its structural assertions.

use pretty_assertions::assert_eq;

use crate::parsing::{
    ParsedMessage,
    blocks::{Block, ListKind},
    inline::Span,
    invariants, parse_message,
};

fn fixture(name: &str) -> ParsedMessage {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();
    let parsed = parse_message(&md);
    invariants::check(&parsed);
    parsed
}

fn names(parsed: &ParsedMessage) -> Vec<&'static str> {
    parsed.iter_blocks().map(Block::name).collect()
}

fn text(s: &str) -> Span {
    Span::Text(s.to_string())
}

// Fixture-based tests

#[test]
fn fixture_pause_recommendations() {
    let parsed = fixture("pause_recommendations");
    assert_eq!(
        names(&parsed),
        vec![
            "Heading",
            "Spacer",
            "Paragraph",
            "Spacer",
            "PauseListCard",
            "Spacer",
            "Paragraph",
            "List"
        ]
    );
    let Block::PauseListCard { items } = &parsed.blocks[4].block else {
        panic!("expected PauseListCard");
    };
    let order: Vec<&str> = items.iter().map(|i| i.ad_name.as_str()).collect();
    assert_eq!(
        order,
        vec![
            "DreamHome | CAR | TOF",
            "Floorplan | IMG | MOF",
            "Winner + Variant B"
        ]
    );
    // Pipes inside the fence never start a table.
    assert_eq!(parsed.blocks[4].lines.start, 4);
    assert_eq!(parsed.blocks[4].lines.end, 11);
}

#[test]
fn fixture_budget_reallocation() {
    let parsed = fixture("budget_reallocation");
    assert_eq!(
        names(&parsed),
        vec![
            "Heading",
            "Spacer",
            "Table",
            "Spacer",
            "BudgetTableCard",
            "Spacer",
            "HorizontalRule",
            "Spacer",
            "Heading",
            "List"
        ]
    );
    assert_eq!(
        parsed.blocks[2].block,
        Block::Table {
            headers: vec!["Platform".into(), "CPL".into(), "Leads".into()],
            rows: vec![
                vec![
                    vec![text("Meta")],
                    vec![Span::Bold("$42".into())],
                    vec![text("118")]
                ],
                vec![vec![text("Google")], vec![text("$61")], vec![text("47")]],
            ],
        }
    );
    let Block::List { kind, items } = &parsed.blocks[9].block else {
        panic!("expected List");
    };
    assert_eq!(*kind, ListKind::Ordered { start: 1 });
    assert_eq!(items.len(), 2);
}

#[test]
fn fixture_email_draft() {
    let parsed = fixture("email_draft");
    assert_eq!(names(&parsed), vec!["Paragraph", "Spacer", "EmailReportCard"]);
    assert_eq!(
        parsed.blocks[2].block,
        Block::EmailReportCard {
            subject: Some("March performance recap".into()),
            subject_line: Some("Subject: March performance recap".into()),
            body: "Hi team,\n\nSpend landed at $48,210 with 1,032 leads.\n\nThanks,\nJARVIS".into(),
        }
    );
}

#[test]
fn fixture_malformed_degrades_without_failing() {
    let parsed = fixture("malformed");
    assert_eq!(
        names(&parsed),
        vec!["Paragraph", "Spacer", "CodeBlock", "Spacer", "CodeBlock"]
    );
    assert_eq!(
        parsed.blocks[0].block,
        Block::Paragraph {
            spans: vec![text("**Unclosed bold and `unclosed code")]
        }
    );
    assert_eq!(
        parsed.blocks[2].block,
        Block::CodeBlock {
            language: Some("pause_list".into()),
            raw_lines: vec!["{not valid json".into()],
        }
    );
    // Unterminated fence runs to the end of the message.
    assert_eq!(
        parsed.blocks[4].block,
        Block::CodeBlock {
            language: None,
            raw_lines: vec![
                "bare fence".into(),
                "".into(),
                "still inside, never closed".into()
            ],
        }
    );
}

// Scenario tests

#[test]
fn heading_hierarchy() {
    let parsed = parse_message("# Title\n## Sub\nBody text");
    invariants::check(&parsed);
    let blocks: Vec<Block> = parsed.iter_blocks().cloned().collect();
    assert_eq!(
        blocks,
        vec![
            Block::Heading {
                level: 1,
                spans: vec![text("Title")]
            },
            Block::Heading {
                level: 2,
                spans: vec![text("Sub")]
            },
            Block::Paragraph {
                spans: vec![text("Body text")]
            },
        ]
    );
}

#[test]
fn list_kind_change_flushes_group() {
    let parsed = parse_message("- one\n- two\n1. three");
    invariants::check(&parsed);
    let blocks: Vec<Block> = parsed.iter_blocks().cloned().collect();
    assert_eq!(
        blocks,
        vec![
            Block::List {
                kind: ListKind::Unordered,
                items: vec![vec![text("one")], vec![text("two")]],
            },
            Block::List {
                kind: ListKind::Ordered { start: 1 },
                items: vec![vec![text("three")]],
            },
        ]
    );
}

#[test]
fn mixed_bullets_share_a_group() {
    let parsed = parse_message("- a\n* b\n• c");
    assert_eq!(names(&parsed), vec!["List"]);
}

#[test]
fn blank_lines_collapse_to_one_spacer() {
    let parsed = parse_message("A\n\n\n\nB");
    invariants::check(&parsed);
    assert_eq!(names(&parsed), vec!["Paragraph", "Spacer", "Paragraph"]);
    assert_eq!(parsed.blocks[1].lines.start, 1);
    assert_eq!(parsed.blocks[1].lines.end, 4);
}

#[test]
fn blank_line_splits_list_but_keeps_numbering() {
    let parsed = parse_message("1. a\n\n2. b");
    invariants::check(&parsed);
    assert_eq!(names(&parsed), vec!["List", "Spacer", "List"]);
    assert!(matches!(
        parsed.blocks[2].block,
        Block::List {
            kind: ListKind::Ordered { start: 2 },
            ..
        }
    ));
}

#[test]
fn paragraph_between_items_splits_list() {
    let parsed = parse_message("- a\nnote\n- b");
    assert_eq!(names(&parsed), vec!["List", "Paragraph", "List"]);
}

#[test]
fn pipe_without_separator_is_a_paragraph() {
    let parsed = parse_message("Meta | Google\nno separator here");
    assert_eq!(names(&parsed), vec!["Paragraph", "Paragraph"]);
}

#[test]
fn table_ends_at_first_line_without_pipe() {
    let parsed = parse_message("a | b\n--|--\n1 | 2\n|---|---|\n3 | 4\nafter");
    invariants::check(&parsed);
    assert_eq!(names(&parsed), vec!["Table", "Paragraph"]);
    let Block::Table { rows, .. } = &parsed.blocks[0].block else {
        panic!("expected Table");
    };
    assert_eq!(rows.len(), 2);
    assert_eq!(parsed.blocks[0].lines.end, 5);
}

#[test]
fn table_with_header_only() {
    let parsed = parse_message("| Platform | Spend |\n|---|---|");
    invariants::check(&parsed);
    assert_eq!(
        parsed.blocks[0].block,
        Block::Table {
            headers: vec!["Platform".into(), "Spend".into()],
            rows: vec![],
        }
    );
}

#[test]
fn fence_closes_on_indented_backticks() {
    let parsed = parse_message("```sql\nselect 1;\n  ```\nafter");
    invariants::check(&parsed);
    assert_eq!(names(&parsed), vec!["CodeBlock", "Paragraph"]);
}

#[test]
fn fence_lines_keep_indentation() {
    let parsed = parse_message("```\n    indented\n```");
    assert_eq!(
        parsed.blocks[0].block,
        Block::CodeBlock {
            language: None,
            raw_lines: vec!["    indented".into()],
        }
    );
}

#[test]
fn heading_prefix_needs_space() {
    let parsed = parse_message("#hashtag\n#### deep");
    assert_eq!(names(&parsed), vec!["Paragraph", "Paragraph"]);
}

#[test]
fn rule_is_checked_before_list_items() {
    let parsed = parse_message("***\n* item");
    assert_eq!(names(&parsed), vec!["HorizontalRule", "List"]);
}

#[test]
fn empty_message() {
    let parsed = parse_message("");
    invariants::check(&parsed);
    assert!(parsed.blocks.is_empty());
}

#[test]
fn blank_lines_only() {
    let parsed = parse_message("\n\n\n");
    invariants::check(&parsed);
    assert_eq!(names(&parsed), vec!["Spacer"]);
}

#[test]
fn partition_holds_for_every_prefix_of_a_fixture() {
    let md = std::fs::read_to_string(format!(
        "{}/src/parsing/tests/fixtures/budget_reallocation.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();
    let lines: Vec<&str> = md.lines().collect();
    for n in 0..=lines.len() {
        let prefix = lines[..n].join("\n");
        invariants::check(&parse_message(&prefix));
    }
}
