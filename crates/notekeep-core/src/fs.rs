//! Filesystem capability used by the index and the store
//!
//! Everything that touches disk goes through [`FileSystem`], so the note
//! index and loader can be driven against any backing store. [`LocalFs`]
//! is the real implementation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use walkdir::WalkDir;

/// One directory entry from [`FileSystem::list_dir`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_file: bool,
    pub is_dir: bool,
}

/// Timestamps of a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileTimes {
    pub modified: Option<SystemTime>,
    /// Birth time where the platform records one
    pub created: Option<SystemTime>,
    /// Inode change time (unix only)
    pub changed: Option<SystemTime>,
}

pub trait FileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;

    fn list_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;

    /// Remove a file. A file that is already gone is not an error.
    fn remove(&self, path: &Path) -> io::Result<()>;

    /// Create a directory and its parents if missing
    fn ensure_dir(&self, path: &Path) -> io::Result<()>;

    fn stat(&self, path: &Path) -> io::Result<FileTimes>;

    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// All regular files under `root`, recursively.
    ///
    /// Unreadable directories are skipped.
    fn walk_files(&self, root: &Path) -> Vec<PathBuf> {
        let mut files = Vec::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            let Ok(entries) = self.list_dir(&dir) else {
                continue;
            };
            for entry in entries {
                if entry.is_dir {
                    pending.push(entry.path);
                } else if entry.is_file {
                    files.push(entry.path);
                }
            }
        }

        files
    }
}

#[cfg(unix)]
fn change_time(metadata: &fs::Metadata) -> Option<SystemTime> {
    use std::os::unix::fs::MetadataExt;
    use std::time::{Duration, UNIX_EPOCH};

    let secs = u64::try_from(metadata.ctime()).ok()?;
    let nanos = u32::try_from(metadata.ctime_nsec()).ok()?;
    UNIX_EPOCH.checked_add(Duration::new(secs, nanos))
}

#[cfg(not(unix))]
fn change_time(_metadata: &fs::Metadata) -> Option<SystemTime> {
    None
}

/// [`FileSystem`] over the local disk
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl FileSystem for LocalFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().to_string(),
                path: entry.path(),
                is_file: file_type.is_file(),
                is_dir: file_type.is_dir(),
            });
        }
        Ok(entries)
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        match fs::remove_file(path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }

    fn ensure_dir(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn stat(&self, path: &Path) -> io::Result<FileTimes> {
        let metadata = fs::metadata(path)?;
        Ok(FileTimes {
            modified: metadata.modified().ok(),
            created: metadata.created().ok(),
            changed: change_time(&metadata),
        })
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn walk_files(&self, root: &Path) -> Vec<PathBuf> {
        WalkDir::new(root)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::debug!(error = %e, "skipping unreadable entry");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Delegates to `LocalFs` except for the walk, exercising the default
    struct ListOnly;

    impl FileSystem for ListOnly {
        fn read_to_string(&self, path: &Path) -> io::Result<String> {
            LocalFs.read_to_string(path)
        }
        fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
            LocalFs.write(path, contents)
        }
        fn list_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
            LocalFs.list_dir(path)
        }
        fn remove(&self, path: &Path) -> io::Result<()> {
            LocalFs.remove(path)
        }
        fn ensure_dir(&self, path: &Path) -> io::Result<()> {
            LocalFs.ensure_dir(path)
        }
        fn stat(&self, path: &Path) -> io::Result<FileTimes> {
            LocalFs.stat(path)
        }
        fn exists(&self, path: &Path) -> bool {
            LocalFs.exists(path)
        }
        fn is_dir(&self, path: &Path) -> bool {
            LocalFs.is_dir(path)
        }
    }

    fn sorted(mut paths: Vec<PathBuf>) -> Vec<PathBuf> {
        paths.sort();
        paths
    }

    #[test]
    fn test_walk_files_default_matches_walkdir() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("a/b")).unwrap();
        fs::write(root.join("top.md"), "x").unwrap();
        fs::write(root.join("a/mid.md"), "x").unwrap();
        fs::write(root.join("a/b/deep.txt"), "x").unwrap();

        let expected = vec![
            root.join("a/b/deep.txt"),
            root.join("a/mid.md"),
            root.join("top.md"),
        ];
        assert_eq!(sorted(LocalFs.walk_files(root)), expected);
        assert_eq!(sorted(ListOnly.walk_files(root)), expected);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gone.md");
        fs::write(&path, "x").unwrap();

        LocalFs.remove(&path).unwrap();
        assert!(!path.exists());
        LocalFs.remove(&path).unwrap();
    }

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("x/y");
        LocalFs.ensure_dir(&nested).unwrap();
        LocalFs.ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_walk_missing_root_is_empty() {
        let dir = tempdir().unwrap();
        assert!(LocalFs.walk_files(&dir.path().join("nope")).is_empty());
        assert!(ListOnly.walk_files(&dir.path().join("nope")).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_stat_reports_change_time() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.md");
        fs::write(&path, "x").unwrap();

        let times = LocalFs.stat(&path).unwrap();
        assert!(times.changed.is_some());
        assert!(times.modified.is_some());
    }

    #[test]
    fn test_is_dir() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.md");
        fs::write(&file, "x").unwrap();

        assert!(LocalFs.is_dir(dir.path()));
        assert!(!LocalFs.is_dir(&file));
        assert!(!LocalFs.is_dir(&dir.path().join("missing")));
    }
}
