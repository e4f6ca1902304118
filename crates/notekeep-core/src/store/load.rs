use std::time::Instant;

use super::NoteStore;
use crate::fs::FileSystem;
use crate::note::Note;
use crate::text::normalize_newlines;
use crate::time::{now_millis, system_time_millis};
use crate::trace_time;

impl<F: FileSystem> NoteStore<F> {
    /// Load every note under the root, most recently modified first.
    ///
    /// Never fails: the index is reconciled first, and a file that cannot be
    /// read is left out of the result rather than aborting the load.
    #[tracing::instrument(skip(self), fields(root = %self.root.display()))]
    pub fn load_all_notes(&self) -> Vec<Note> {
        let start = Instant::now();
        let reconciled = self.reconciled();

        let mut notes: Vec<Note> = reconciled
            .index
            .entries
            .iter()
            .filter_map(|(note_id, entry)| {
                let path = reconciled.files.get(&entry.relative_path)?;

                let text = match self.fs.read_to_string(path) {
                    Ok(text) => normalize_newlines(&text),
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "skipping unreadable note");
                        return None;
                    }
                };

                let updated_at = self
                    .fs
                    .stat(path)
                    .ok()
                    .and_then(|times| times.modified)
                    .map(system_time_millis)
                    .unwrap_or_else(now_millis);

                Some(Note::materialize(
                    note_id,
                    entry,
                    text,
                    updated_at,
                    path.clone(),
                ))
            })
            .collect();

        notes.sort_by(|a, b| {
            b.updated_at
                .cmp(&a.updated_at)
                .then_with(|| a.note_id.cmp(&b.note_id))
        });

        trace_time!(start, "load_all_notes", count = notes.len());
        notes
    }

    /// Load a single note by id, after the same reconciliation as a full load
    pub fn load_note(&self, note_id: &str) -> Option<Note> {
        let note_id = crate::sanitize::try_sanitize_identifier(note_id)?;
        self.load_all_notes()
            .into_iter()
            .find(|note| note.note_id == note_id)
    }
}
