//! Persisted text -> document tree
//!
//! Decoding never fails. Anything that does not parse as a checklist run or
//! a balanced toggle block becomes a literal paragraph.

use super::document::{Block, ChecklistItem, Document, Inline};
use super::markers::{find_toggle_end, is_code_fence, parse_checklist, parse_toggle_open};
use crate::text::normalize_newlines;

/// An open toggle block (or the document root) being filled.
struct Frame {
    open: bool,
    summary: String,
    /// Index of the closing `:::` line, or `lines.len()` for the root
    end: usize,
    in_code_fence: bool,
    blocks: Vec<Block>,
}

impl Frame {
    fn new(open: bool, summary: &str, end: usize) -> Self {
        Frame {
            open,
            summary: summary.to_string(),
            end,
            in_code_fence: false,
            blocks: Vec::new(),
        }
    }

    fn into_toggle(self) -> Block {
        Block::Toggle {
            open: self.open,
            summary: vec![Inline::plain(self.summary)],
            children: self.blocks,
        }
    }
}

/// Decode persisted text into a document tree.
///
/// Blank input decodes to an empty document.
pub fn decode(text: &str) -> Document {
    let normalized = normalize_newlines(text);
    if normalized.trim().is_empty() {
        return Document::default();
    }

    let lines: Vec<&str> = normalized.split('\n').collect();
    let mut stack = vec![Frame::new(true, "", lines.len())];
    let mut cursor = 0;

    loop {
        // Close every toggle whose closing marker is under the cursor
        while stack.len() > 1 && stack.last().is_some_and(|f| f.end == cursor) {
            let Some(finished) = stack.pop() else { break };
            if let Some(parent) = stack.last_mut() {
                parent.blocks.push(finished.into_toggle());
            }
            cursor += 1;
        }

        let Some(frame) = stack.last_mut() else { break };
        if cursor >= frame.end {
            break;
        }

        let line = lines[cursor];
        let trimmed = line.trim();

        if is_code_fence(trimmed) {
            frame.in_code_fence = !frame.in_code_fence;
            frame.blocks.push(Block::paragraph(line));
            cursor += 1;
            continue;
        }

        if !frame.in_code_fence {
            if let Some(toggle) = parse_toggle_open(trimmed) {
                if let Some(end) = find_toggle_end(&lines, cursor, frame.end) {
                    stack.push(Frame::new(toggle.open, toggle.summary, end));
                    cursor += 1;
                    continue;
                }
            }

            if parse_checklist(line).is_some() {
                let (items, next) = read_checklist_run(&lines, cursor, frame.end);
                frame.blocks.push(Block::Checklist { items });
                cursor = next;
                continue;
            }
        }

        frame.blocks.push(Block::paragraph(line));
        cursor += 1;
    }

    let blocks = stack
        .into_iter()
        .next()
        .map(|root| root.blocks)
        .unwrap_or_default();
    Document::new(blocks)
}

/// Consume consecutive checklist lines starting at `start`.
///
/// Returns the item tree and the index of the first line not consumed.
fn read_checklist_run(lines: &[&str], start: usize, limit: usize) -> (Vec<ChecklistItem>, usize) {
    let mut roots = Vec::new();
    let mut open: Vec<ChecklistItem> = Vec::new();
    let mut index = start;

    while index < limit {
        let Some(entry) = parse_checklist(lines[index]) else {
            break;
        };

        // Deeper than any open ancestor: becomes a child of the deepest one
        let depth = entry.depth.min(open.len());
        close_items(&mut open, &mut roots, depth);
        open.push(ChecklistItem::new(entry.checked, entry.text));
        index += 1;
    }

    close_items(&mut open, &mut roots, 0);
    (roots, index)
}

/// Pop open items until only `depth` remain, attaching each to its parent
fn close_items(open: &mut Vec<ChecklistItem>, roots: &mut Vec<ChecklistItem>, depth: usize) {
    while open.len() > depth {
        let Some(item) = open.pop() else { break };
        match open.last_mut() {
            Some(parent) => parent.children.push(item),
            None => roots.push(item),
        }
    }
}
