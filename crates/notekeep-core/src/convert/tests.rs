use super::document::visible_text;
use super::*;

fn item(checked: bool, text: &str, children: Vec<ChecklistItem>) -> ChecklistItem {
    ChecklistItem::new(checked, text).with_children(children)
}

fn visible_lines(doc: &Document) -> Vec<String> {
    doc.blocks
        .iter()
        .map(|b| match b {
            Block::Paragraph { content } | Block::Heading { content, .. } => visible_text(content),
            other => panic!("unexpected block: {:?}", other),
        })
        .collect()
}

#[test]
fn test_paragraph_and_heading_round_trip() {
    let docs = vec![
        vec![Block::paragraph("one line")],
        vec![Block::heading(1, "Title"), Block::paragraph("body text")],
        vec![
            Block::heading(2, "Section"),
            Block::paragraph(""),
            Block::paragraph("  indented stays"),
            Block::heading(3, "Sub"),
        ],
        vec![
            Block::paragraph("a"),
            Block::paragraph(""),
            Block::paragraph(""),
            Block::paragraph("b"),
        ],
        vec![Block::paragraph("unicode 노트 ✓"), Block::paragraph("x")],
    ];

    for blocks in docs {
        let expected: Vec<String> = visible_lines(&Document::new(blocks.clone()));
        let decoded = decode(&encode(&blocks));
        assert_eq!(visible_lines(&decoded), expected, "blocks: {:?}", blocks);
    }
}

#[test]
fn test_checklist_round_trip_to_depth_five() {
    let deep = item(
        false,
        "d0",
        vec![item(
            true,
            "d1",
            vec![item(
                false,
                "d2",
                vec![item(true, "d3", vec![item(false, "d4", vec![])])],
            )],
        )],
    );
    let trees = vec![
        vec![deep],
        vec![
            item(true, "a", vec![item(false, "a.1", vec![]), item(true, "a.2", vec![])]),
            item(false, "b", vec![]),
            item(true, "c", vec![item(true, "c.1", vec![item(false, "c.1.1", vec![])])]),
        ],
        vec![item(false, "", vec![item(true, "child of empty", vec![])])],
    ];

    for items in trees {
        let doc = Document::new(vec![Block::Checklist {
            items: items.clone(),
        }]);
        let decoded = decode(&encode(&doc));
        assert_eq!(decoded, doc);
    }
}

#[test]
fn test_toggle_round_trip_preserves_flags_and_summaries() {
    let doc = Document::new(vec![
        Block::toggle(
            true,
            "First",
            vec![
                Block::paragraph("body"),
                Block::toggle(
                    false,
                    "Nested",
                    vec![Block::toggle(true, "Deepest", vec![Block::paragraph("x")])],
                ),
            ],
        ),
        Block::paragraph("between"),
        Block::toggle(
            false,
            "Tasks",
            vec![Block::Checklist {
                items: vec![item(true, "t", vec![item(false, "u", vec![])])],
            }],
        ),
    ]);

    let text = encode(&doc);
    let opens = text.lines().filter(|l| l.starts_with(":::toggle[")).count();
    let closes = text.lines().filter(|l| *l == ":::").count();
    assert_eq!(opens, 4);
    assert_eq!(opens, closes);

    assert_eq!(decode(&text), doc);
}

#[test]
fn test_scenario_checklist_text_round_trip() {
    let text = "- [x] task A\n  - [ ] subtask";
    let doc = decode(text);
    assert_eq!(
        doc.blocks,
        vec![Block::Checklist {
            items: vec![item(true, "task A", vec![item(false, "subtask", vec![])])]
        }]
    );
    assert_eq!(encode(&doc), text);
}

#[test]
fn test_malformed_input_never_panics() {
    let inputs = [
        ":::",
        ":::\n:::\n:::toggle[open]",
        ":::toggle[open]\n:::toggle[open]\n:::toggle[closed]\n:::",
        "- [ ]\n\t\t\t- [x]\n- [",
        "```\n:::toggle[open]\n```\n:::",
        "\r\r\n\n\r",
    ];
    for input in inputs {
        let doc = decode(input);
        let _ = render_html(&doc);
        let _ = to_plain_text(input);
        let _ = derive_title(input);
        let _ = encode(&doc);
    }
}

#[test]
fn test_plain_text_matches_decoded_visible_text() {
    let text = "Intro\n- [x] one\n  - [ ] two\n:::toggle[open] More\ninside\n:::";
    assert_eq!(to_plain_text(text), "Intro\none\n  two\nMore\ninside");
}
