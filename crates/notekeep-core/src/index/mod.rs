//! Sidecar note index
//!
//! Maps stable note ids to the file currently holding each note. Stored as
//! pretty-printed JSON at [`INDEX_FILE`] under the storage root:
//!
//! ```json
//! { "entries": { "<noteId>": { "relativePath": "work/todo.md", "createdAt": 1700000000000 } } }
//! ```
//!
//! A missing or corrupt sidecar reads as an empty index. Reconciliation
//! against the files on disk then rebuilds whatever it can.

mod reconcile;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::fs::FileSystem;
use crate::paths::INDEX_FILE;

pub use reconcile::{reconcile, ReconcileReport, Reconciled};

/// Where one note lives and what we know about it beyond the file itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteIndexEntry {
    /// Posix-style path relative to the storage root
    pub relative_path: String,
    /// Milliseconds since the Unix epoch
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteIndex {
    #[serde(default)]
    pub entries: BTreeMap<String, NoteIndexEntry>,
}

impl NoteIndex {
    pub fn get(&self, note_id: &str) -> Option<&NoteIndexEntry> {
        self.entries.get(note_id)
    }

    pub fn upsert(&mut self, note_id: impl Into<String>, entry: NoteIndexEntry) {
        self.entries.insert(note_id.into(), entry);
    }

    pub fn remove(&mut self, note_id: &str) -> Option<NoteIndexEntry> {
        self.entries.remove(note_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn index_path(root: &Path) -> PathBuf {
    root.join(INDEX_FILE)
}

/// Read the sidecar index. Never fails: absent or malformed means empty.
pub fn read_index<F: FileSystem + ?Sized>(fs: &F, root: &Path) -> NoteIndex {
    let path = index_path(root);
    let raw = match fs.read_to_string(&path) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "no readable index, starting empty");
            return NoteIndex::default();
        }
    };

    match serde_json::from_str::<NoteIndex>(&raw) {
        Ok(index) => index,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring malformed index");
            NoteIndex::default()
        }
    }
}

/// Persist the sidecar index as pretty-printed JSON
pub fn write_index<F: FileSystem + ?Sized>(fs: &F, root: &Path, index: &NoteIndex) -> Result<()> {
    let json = serde_json::to_string_pretty(index)?;
    fs.write(&index_path(root), &json)?;
    Ok(())
}
