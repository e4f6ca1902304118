//! Conversion between the editor's document tree and the persisted text format
//!
//! The text format is line oriented: paragraphs and headings are their
//! visible text, checklists use `- [x]` lines indented two spaces per level,
//! and collapsible sections are wrapped in `:::toggle[open|closed]` / `:::`
//! marker lines. Nothing in this module returns an error; unrecognized input
//! degrades to literal text.

pub mod decode;
pub mod document;
pub mod encode;
pub mod html;
pub mod markers;
pub mod plain;

pub use decode::decode;
pub use document::{Block, BlockSource, ChecklistItem, Document, Inline, Mark};
pub use encode::encode;
pub use html::render_html;
pub use plain::{derive_title, to_plain_text, FALLBACK_TITLE, MAX_TITLE_CHARS};

#[cfg(test)]
mod tests;
