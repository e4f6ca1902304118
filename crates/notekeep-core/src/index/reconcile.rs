use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use super::{NoteIndex, NoteIndexEntry};
use crate::fs::FileSystem;
use crate::id::id_for_relative_path;
use crate::paths::{is_note_file, relative_path};
use crate::time::creation_millis;

/// What a reconcile pass changed
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ReconcileReport {
    /// Ids whose files no longer exist
    pub pruned: Vec<String>,
    /// Ids synthesized for untracked files
    pub adopted: Vec<String>,
}

impl ReconcileReport {
    pub fn changed(&self) -> bool {
        !self.pruned.is_empty() || !self.adopted.is_empty()
    }
}

/// An index brought in line with the files on disk
#[derive(Debug, Clone)]
pub struct Reconciled {
    pub index: NoteIndex,
    /// Every eligible note file, keyed by posix relative path
    pub files: BTreeMap<String, PathBuf>,
    pub report: ReconcileReport,
}

/// Align `index` with the note files under `root`.
///
/// Entries pointing at missing files are dropped. Files no entry points at
/// are adopted under an id derived from their relative path, so the same
/// file gets the same id on every pass. Persisting is left to the caller.
#[tracing::instrument(skip(fs, root, index), fields(root = %root.display()))]
pub fn reconcile<F: FileSystem + ?Sized>(fs: &F, root: &Path, mut index: NoteIndex) -> Reconciled {
    let files: BTreeMap<String, PathBuf> = fs
        .walk_files(root)
        .into_iter()
        .filter(|path| is_note_file(path))
        .map(|path| (relative_path(root, &path), path))
        .collect();

    let mut report = ReconcileReport::default();

    index.entries.retain(|id, entry| {
        let keep = files.contains_key(&entry.relative_path);
        if !keep {
            tracing::debug!(note_id = %id, path = %entry.relative_path, "pruning orphan entry");
            report.pruned.push(id.clone());
        }
        keep
    });

    let tracked: HashSet<String> = index
        .entries
        .values()
        .map(|entry| entry.relative_path.clone())
        .collect();

    for (rel, path) in &files {
        if tracked.contains(rel) {
            continue;
        }

        let note_id = id_for_relative_path(rel);
        if index.entries.contains_key(&note_id) {
            tracing::debug!(note_id = %note_id, path = %rel, "derived id already taken, leaving file untracked");
            continue;
        }

        let created_at = match fs.stat(path) {
            Ok(times) => creation_millis(times.created, times.changed),
            Err(_) => creation_millis(None, None),
        };

        tracing::debug!(note_id = %note_id, path = %rel, "adopting untracked file");
        index.upsert(
            note_id.clone(),
            NoteIndexEntry {
                relative_path: rel.clone(),
                created_at,
                manual_title: None,
            },
        );
        report.adopted.push(note_id);
    }

    Reconciled {
        index,
        files,
        report,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::LocalFs;
    use crate::index::index_path;
    use std::fs;
    use tempfile::tempdir;

    fn entry(path: &str, created_at: i64) -> NoteIndexEntry {
        NoteIndexEntry {
            relative_path: path.to_string(),
            created_at,
            manual_title: None,
        }
    }

    #[test]
    fn test_prunes_missing_and_keeps_present() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("kept.md"), "x").unwrap();

        let mut index = NoteIndex::default();
        index.upsert("kept", entry("kept.md", 1));
        index.upsert("gone", entry("gone.md", 2));

        let result = reconcile(&LocalFs, dir.path(), index);
        assert_eq!(result.report.pruned, vec!["gone".to_string()]);
        assert!(result.report.adopted.is_empty());
        assert_eq!(result.index.len(), 1);
        assert_eq!(result.index.get("kept"), Some(&entry("kept.md", 1)));
    }

    #[test]
    fn test_adopts_untracked_files_deterministically() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("work")).unwrap();
        fs::write(dir.path().join("manual.md"), "x").unwrap();
        fs::write(dir.path().join("work/plan.MD"), "x").unwrap();
        fs::write(dir.path().join("skip.txt"), "x").unwrap();

        let first = reconcile(&LocalFs, dir.path(), NoteIndex::default());
        let second = reconcile(&LocalFs, dir.path(), NoteIndex::default());

        assert_eq!(first.report.adopted.len(), 2);
        assert_eq!(first.report.adopted, second.report.adopted);
        assert!(first
            .report
            .adopted
            .contains(&id_for_relative_path("work/plan.MD")));
        assert_eq!(first.files.len(), 2);
    }

    #[test]
    fn test_index_file_is_not_a_note() {
        let dir = tempdir().unwrap();
        fs::write(index_path(dir.path()), "{}").unwrap();

        let result = reconcile(&LocalFs, dir.path(), NoteIndex::default());
        assert!(result.files.is_empty());
        assert!(!result.report.changed());
    }

    #[test]
    fn test_tracked_file_is_not_adopted_twice() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("hello.md"), "x").unwrap();

        let mut index = NoteIndex::default();
        index.upsert("abc", entry("hello.md", 5));

        let result = reconcile(&LocalFs, dir.path(), index);
        assert!(!result.report.changed());
        assert_eq!(result.index.len(), 1);
    }
}
