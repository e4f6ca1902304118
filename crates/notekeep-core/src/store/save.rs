use super::NoteStore;
use crate::convert::{derive_title, MAX_TITLE_CHARS};
use crate::error::{NoteError, Result};
use crate::fs::FileSystem;
use crate::index::{read_index, write_index, NoteIndexEntry};
use crate::note::{SaveRequest, SaveResult};
use crate::paths::{relative_path, resolve_in_root, resolve_unique_path, same_path};
use crate::sanitize::{sanitize_folder_path, sanitize_identifier, slugify_title};
use crate::text::{to_crlf, truncate_chars};
use crate::time::{now_millis, system_time_millis};

impl<F: FileSystem> NoteStore<F> {
    /// Write a note to disk and record it in the index.
    ///
    /// A note already in the index keeps its file unless its slug changed,
    /// in which case it moves to a fresh non-colliding name and the old file
    /// is removed. `createdAt` survives every re-save.
    #[tracing::instrument(skip(self, request), fields(root = %self.root.display(), note_id = %request.note_id))]
    pub fn save_note(&self, request: &SaveRequest) -> Result<SaveResult> {
        let note_id = sanitize_identifier(&request.note_id);
        let folder = sanitize_folder_path(&request.folder_path);
        let target_dir = if folder.is_empty() {
            self.root.clone()
        } else {
            self.root.join(&folder)
        };

        self.fs
            .ensure_dir(&target_dir)
            .map_err(|e| NoteError::io_operation("create folder", target_dir.display(), e))?;

        let mut index = read_index(&self.fs, &self.root);
        let existing = index.get(&note_id).and_then(|entry| {
            let path = resolve_in_root(&self.root, &entry.relative_path);
            if path.is_none() {
                tracing::warn!(path = %entry.relative_path, "ignoring index entry outside the storage root");
            }
            path.map(|path| (entry.created_at, path))
        });
        let existing_path = existing.as_ref().map(|(_, path)| path.clone());

        let title_source = if request.title.trim().is_empty() {
            derive_title(&request.text)
        } else {
            request.title.clone()
        };
        let base_name = slugify_title(&title_source);
        let path = resolve_unique_path(&self.fs, &target_dir, &base_name, existing_path.as_deref());
        tracing::debug!(path = %path.display(), "resolved note path");

        self.fs
            .write(&path, &to_crlf(&request.text))
            .map_err(|e| NoteError::io_operation("write note", path.display(), e))?;

        if let Some(old) = existing_path.as_deref().filter(|old| !same_path(old, &path)) {
            tracing::debug!(old = %old.display(), "removing superseded file");
            if let Err(e) = self.fs.remove(old) {
                tracing::warn!(path = %old.display(), error = %e, "failed to remove superseded file");
            }
        }

        let created_at = existing
            .map(|(created_at, _)| created_at)
            .unwrap_or_else(now_millis);
        let manual_title = truncate_chars(request.title.trim(), MAX_TITLE_CHARS);

        index.upsert(
            note_id.clone(),
            NoteIndexEntry {
                relative_path: relative_path(&self.root, &path),
                created_at,
                manual_title: (request.is_title_manual && !manual_title.is_empty())
                    .then_some(manual_title),
            },
        );
        write_index(&self.fs, &self.root, &index)?;

        let updated_at = self
            .fs
            .stat(&path)
            .ok()
            .and_then(|times| times.modified)
            .map(system_time_millis)
            .unwrap_or_else(now_millis);

        Ok(SaveResult {
            file_path: path,
            note_id,
            created_at,
            updated_at,
        })
    }

    /// Save a note under a freshly generated id
    pub fn create_note(&self, mut request: SaveRequest) -> Result<SaveResult> {
        request.note_id = crate::id::generate();
        self.save_note(&request)
    }
}
