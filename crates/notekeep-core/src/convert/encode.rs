//! Document tree -> persisted text

use super::document::{visible_text, Block, BlockSource, ChecklistItem};
use super::markers::{checklist_line, toggle_open_line, TOGGLE_CLOSE};

/// Longest run of blank lines kept in the output
const MAX_BLANK_RUN: usize = 2;

/// Encode an editor document into the line-oriented text format.
///
/// Line endings are LF; the store converts to CRLF when writing.
pub fn encode<S: BlockSource + ?Sized>(source: &S) -> String {
    let blocks = source.blocks();
    let mut lines = Vec::new();
    encode_blocks(&blocks, &mut lines);
    collapse_blank_runs(lines).join("\n")
}

fn encode_blocks(blocks: &[Block], lines: &mut Vec<String>) {
    for block in blocks {
        match block {
            Block::Paragraph { content } | Block::Heading { content, .. } => {
                lines.push(visible_text(content));
            }
            Block::List { items, .. } => {
                lines.extend(items.iter().map(|item| visible_text(item)));
            }
            Block::Checklist { items } => encode_checklist(items, 0, lines),
            Block::Toggle {
                open,
                summary,
                children,
            } => {
                lines.push(toggle_open_line(*open, &visible_text(summary)));
                encode_blocks(children, lines);
                lines.push(TOGGLE_CLOSE.to_string());
            }
            Block::Table { rows } => {
                let cells: Vec<&str> = rows
                    .iter()
                    .flatten()
                    .map(|cell| cell.trim())
                    .filter(|cell| !cell.is_empty())
                    .collect();
                lines.push(cells.join(" "));
            }
            Block::Other { text } => lines.push(text.replace('\n', " ")),
        }
    }
}

fn encode_checklist(items: &[ChecklistItem], depth: usize, lines: &mut Vec<String>) {
    for item in items {
        lines.push(checklist_line(depth, item.checked, &item.text()));
        encode_checklist(&item.children, depth + 1, lines);
    }
}

fn collapse_blank_runs(lines: Vec<String>) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len());
    let mut blank_run = 0;

    for line in lines {
        if line.trim().is_empty() {
            blank_run += 1;
            if blank_run > MAX_BLANK_RUN {
                continue;
            }
        } else {
            blank_run = 0;
        }
        out.push(line);
    }

    out
}
