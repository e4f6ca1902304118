//! Structured document tree exchanged with the rich-text editor

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Inline formatting mark
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Mark {
    Bold,
    Italic,
    Link { href: String },
}

/// A run of text sharing one set of marks
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Inline {
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<Mark>,
}

impl Inline {
    /// Unformatted text
    pub fn plain(text: impl Into<String>) -> Self {
        Inline {
            text: text.into(),
            marks: Vec::new(),
        }
    }

    pub fn with_mark(mut self, mark: Mark) -> Self {
        self.marks.push(mark);
        self
    }
}

/// Concatenated text of an inline run, marks dropped
pub fn visible_text(content: &[Inline]) -> String {
    content.iter().map(|i| i.text.as_str()).collect()
}

/// One task in a checklist, with its nested sub-tasks
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub checked: bool,
    pub content: Vec<Inline>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ChecklistItem>,
}

impl ChecklistItem {
    pub fn new(checked: bool, text: impl Into<String>) -> Self {
        ChecklistItem {
            checked,
            content: vec![Inline::plain(text)],
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<ChecklistItem>) -> Self {
        self.children = children;
        self
    }

    /// The item's own text, excluding nested items
    pub fn text(&self) -> String {
        visible_text(&self.content)
    }
}

/// Block-level node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Block {
    Paragraph {
        content: Vec<Inline>,
    },
    Heading {
        level: u8,
        content: Vec<Inline>,
    },
    List {
        ordered: bool,
        items: Vec<Vec<Inline>>,
    },
    Checklist {
        items: Vec<ChecklistItem>,
    },
    /// Collapsible section
    Toggle {
        open: bool,
        summary: Vec<Inline>,
        children: Vec<Block>,
    },
    Table {
        rows: Vec<Vec<String>>,
    },
    /// Anything the editor emits that the text format does not model
    Other {
        text: String,
    },
}

impl Block {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph {
            content: vec![Inline::plain(text)],
        }
    }

    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading {
            level: level.clamp(1, 3),
            content: vec![Inline::plain(text)],
        }
    }

    pub fn toggle(open: bool, summary: impl Into<String>, children: Vec<Block>) -> Self {
        Block::Toggle {
            open,
            summary: vec![Inline::plain(summary)],
            children,
        }
    }
}

/// A whole document: an ordered sequence of top-level blocks
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Document { blocks }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Read access to an editor's document tree.
///
/// The editor widget owns its own node model; an adapter on its side
/// implements this trait to hand the converter plain [`Block`] values.
pub trait BlockSource {
    /// Top-level blocks in document order
    fn blocks(&self) -> Cow<'_, [Block]>;
}

impl BlockSource for Document {
    fn blocks(&self) -> Cow<'_, [Block]> {
        Cow::Borrowed(&self.blocks)
    }
}

impl BlockSource for [Block] {
    fn blocks(&self) -> Cow<'_, [Block]> {
        Cow::Borrowed(self)
    }
}

impl BlockSource for Vec<Block> {
    fn blocks(&self) -> Cow<'_, [Block]> {
        Cow::Borrowed(self.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_text_drops_marks() {
        let content = vec![
            Inline::plain("see "),
            Inline::plain("docs").with_mark(Mark::Link {
                href: "https://example.com".to_string(),
            }),
            Inline::plain("!").with_mark(Mark::Bold),
        ];
        assert_eq!(visible_text(&content), "see docs!");
    }

    #[test]
    fn test_heading_level_is_clamped() {
        assert_eq!(
            Block::heading(7, "x"),
            Block::Heading {
                level: 3,
                content: vec![Inline::plain("x")]
            }
        );
    }

    #[test]
    fn test_block_json_is_tagged() {
        let json = serde_json::to_value(Block::toggle(true, "More", vec![])).unwrap();
        assert_eq!(json["type"], "toggle");
        assert_eq!(json["open"], true);
        assert_eq!(json["summary"][0]["text"], "More");
    }
}
