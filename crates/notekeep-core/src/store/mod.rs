//! Note storage under one storage root
//!
//! A storage root holds `.md` note files, possibly in nested folders, plus
//! the sidecar index. Every operation re-reads the index and the directory
//! tree; nothing is cached between calls. One writer per root is assumed.

mod files;
mod load;
mod save;

use std::path::{Path, PathBuf};

use crate::error::{NoteError, Result};
use crate::fs::{FileSystem, LocalFs};
use crate::index::{read_index, reconcile, write_index, ReconcileReport, Reconciled};
use crate::paths::resolve_in_root;

pub use files::{
    list_markdown_files, read_markdown_file, read_text_file, save_text_file, title_from_filename,
    write_markdown_file,
};

/// A storage root and the filesystem it lives on
#[derive(Debug, Clone)]
pub struct NoteStore<F: FileSystem = LocalFs> {
    root: PathBuf,
    fs: F,
}

impl NoteStore<LocalFs> {
    /// Open the storage root at `root`, creating it if missing
    #[tracing::instrument(skip(root), fields(root = %root.display()))]
    pub fn open(root: &Path) -> Result<Self> {
        Self::with_fs(root, LocalFs)
    }
}

impl<F: FileSystem> NoteStore<F> {
    pub fn with_fs(root: &Path, fs: F) -> Result<Self> {
        if !root.is_absolute() {
            return Err(NoteError::NotAbsolute {
                path: root.to_path_buf(),
            });
        }

        if fs.exists(root) && !fs.is_dir(root) {
            crate::bail_invalid!("storage root", root.display());
        }

        fs.ensure_dir(root)
            .map_err(|e| NoteError::io_operation("create storage root", root.display(), e))?;

        Ok(NoteStore {
            root: root.to_path_buf(),
            fs,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// Reconcile the index with the files on disk and persist it if anything changed.
    ///
    /// A failed persist is logged and otherwise ignored; the returned state
    /// is still correct for this call.
    pub(crate) fn reconciled(&self) -> Reconciled {
        let index = read_index(&self.fs, &self.root);
        let reconciled = reconcile(&self.fs, &self.root, index);

        if reconciled.report.changed() {
            tracing::debug!(
                pruned = reconciled.report.pruned.len(),
                adopted = reconciled.report.adopted.len(),
                "persisting reconciled index"
            );
            if let Err(e) = write_index(&self.fs, &self.root, &reconciled.index) {
                tracing::warn!(error = %e, "failed to persist reconciled index");
            }
        }

        reconciled
    }

    /// Bring the index in line with the files on disk without loading notes.
    ///
    /// Unlike a load, a failure to persist the result is reported.
    #[tracing::instrument(skip(self), fields(root = %self.root.display()))]
    pub fn reconcile_index(&self) -> Result<ReconcileReport> {
        let index = read_index(&self.fs, &self.root);
        let reconciled = reconcile(&self.fs, &self.root, index);

        if reconciled.report.changed() {
            write_index(&self.fs, &self.root, &reconciled.index)?;
        }

        Ok(reconciled.report)
    }

    /// Forget a note and remove its file.
    ///
    /// Returns the path the note lived at, or `None` for an unknown id.
    /// A file that is already gone is not an error. An entry whose path
    /// leaves the storage root is dropped without touching any file.
    #[tracing::instrument(skip(self), fields(root = %self.root.display()))]
    pub fn delete_note(&self, note_id: &str) -> Result<Option<PathBuf>> {
        let Some(note_id) = crate::sanitize::try_sanitize_identifier(note_id) else {
            return Ok(None);
        };

        let mut index = read_index(&self.fs, &self.root);
        let Some(entry) = index.remove(&note_id) else {
            tracing::debug!(note_id = %note_id, "delete of unknown note");
            return Ok(None);
        };

        write_index(&self.fs, &self.root, &index)?;

        let Some(path) = resolve_in_root(&self.root, &entry.relative_path) else {
            tracing::warn!(path = %entry.relative_path, "dropped index entry outside the storage root");
            return Ok(None);
        };

        if let Err(e) = self.fs.remove(&path) {
            tracing::warn!(path = %path.display(), error = %e, "failed to remove note file");
        }

        Ok(Some(path))
    }
}
