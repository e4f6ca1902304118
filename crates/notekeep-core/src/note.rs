//! Notes as handed to callers, and the shapes of save requests and results

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::convert::{decode, derive_title, render_html, to_plain_text, Document, MAX_TITLE_CHARS};
use crate::index::NoteIndexEntry;
use crate::sanitize::INBOX_FOLDER;
use crate::text::truncate_chars;

/// One note, materialized from its file on each load
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub note_id: String,
    pub title: String,
    pub is_title_manual: bool,
    /// Raw persisted text with LF line endings
    pub text: String,
    pub plain_text: String,
    pub document: Document,
    /// Directory part of the relative path, or `"inbox"` at the root
    pub folder_path: String,
    pub created_at: i64,
    pub updated_at: i64,
    pub file_path: PathBuf,
}

impl Note {
    /// Assemble a note from its index entry and the file's text.
    pub fn materialize(
        note_id: &str,
        entry: &NoteIndexEntry,
        text: String,
        updated_at: i64,
        file_path: PathBuf,
    ) -> Self {
        let manual = entry
            .manual_title
            .as_deref()
            .map(str::trim)
            .filter(|title| !title.is_empty());

        let title = match manual {
            Some(title) => truncate_chars(title, MAX_TITLE_CHARS),
            None => derive_title(&text),
        };

        Note {
            note_id: note_id.to_string(),
            title,
            is_title_manual: manual.is_some(),
            plain_text: to_plain_text(&text),
            document: decode(&text),
            folder_path: folder_bucket(&entry.relative_path),
            created_at: entry.created_at,
            updated_at,
            file_path,
            text,
        }
    }

    pub fn html(&self) -> String {
        render_html(&self.document)
    }

    /// Case-insensitive substring match over title and plain text
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.plain_text.to_lowercase().contains(&needle)
    }
}

/// Folder bucket for a posix relative path; root-level files land in `"inbox"`.
pub fn folder_bucket(relative_path: &str) -> String {
    match Path::new(relative_path).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            parent.to_string_lossy().replace('\\', "/")
        }
        _ => INBOX_FOLDER.to_string(),
    }
}

/// What a caller supplies to save a note
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRequest {
    pub note_id: String,
    /// Title used for the filename; derived from `text` when empty
    #[serde(default)]
    pub title: String,
    pub text: String,
    #[serde(default)]
    pub folder_path: String,
    #[serde(default)]
    pub is_title_manual: bool,
}

impl SaveRequest {
    pub fn new(note_id: impl Into<String>, title: impl Into<String>, text: impl Into<String>) -> Self {
        SaveRequest {
            note_id: note_id.into(),
            title: title.into(),
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn in_folder(mut self, folder_path: impl Into<String>) -> Self {
        self.folder_path = folder_path.into();
        self
    }

    pub fn manual_title(mut self, is_manual: bool) -> Self {
        self.is_title_manual = is_manual;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResult {
    pub file_path: PathBuf,
    pub note_id: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(path: &str, manual_title: Option<&str>) -> NoteIndexEntry {
        NoteIndexEntry {
            relative_path: path.to_string(),
            created_at: 10,
            manual_title: manual_title.map(str::to_string),
        }
    }

    #[test]
    fn test_folder_bucket() {
        assert_eq!(folder_bucket("hello.md"), "inbox");
        assert_eq!(folder_bucket("work/hello.md"), "work");
        assert_eq!(folder_bucket("work/2024/hello.md"), "work/2024");
    }

    #[test]
    fn test_derived_title() {
        let note = Note::materialize(
            "abc",
            &entry("hello.md", None),
            "# Hello\nworld".to_string(),
            20,
            PathBuf::from("/notes/hello.md"),
        );
        assert_eq!(note.title, "Hello");
        assert!(!note.is_title_manual);
        assert_eq!(note.folder_path, "inbox");
        assert_eq!(note.created_at, 10);
        assert_eq!(note.updated_at, 20);
    }

    #[test]
    fn test_manual_title_wins_unless_blank() {
        let manual = Note::materialize(
            "abc",
            &entry("work/a.md", Some("  Mine  ")),
            "body".to_string(),
            0,
            PathBuf::from("/notes/work/a.md"),
        );
        assert_eq!(manual.title, "Mine");
        assert!(manual.is_title_manual);

        let blank = Note::materialize(
            "abc",
            &entry("work/a.md", Some("   ")),
            "body".to_string(),
            0,
            PathBuf::from("/notes/work/a.md"),
        );
        assert_eq!(blank.title, "body");
        assert!(!blank.is_title_manual);
    }

    #[test]
    fn test_hand_edited_manual_title_is_capped() {
        let long = "x".repeat(MAX_TITLE_CHARS + 25);
        let note = Note::materialize(
            "abc",
            &entry("a.md", Some(&long)),
            "body".to_string(),
            0,
            PathBuf::from("/notes/a.md"),
        );
        assert_eq!(note.title, "x".repeat(MAX_TITLE_CHARS));
        assert!(note.is_title_manual);
    }

    #[test]
    fn test_serializes_camel_case() {
        let note = Note::materialize(
            "abc",
            &entry("hello.md", None),
            "- [x] done".to_string(),
            1,
            PathBuf::from("/notes/hello.md"),
        );
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json["noteId"], "abc");
        assert_eq!(json["isTitleManual"], false);
        assert_eq!(json["plainText"], "done");
        assert_eq!(json["document"]["blocks"][0]["type"], "checklist");
    }

    #[test]
    fn test_matches() {
        let note = Note::materialize(
            "abc",
            &entry("hello.md", None),
            "Groceries\nBuy MILK".to_string(),
            1,
            PathBuf::from("/notes/hello.md"),
        );
        assert!(note.matches("milk"));
        assert!(note.matches("grocer"));
        assert!(!note.matches("bread"));
    }
}
