//! Storage-root layout and unique path allocation

use std::path::{Component, Path, PathBuf};

use crate::fs::FileSystem;

/// Sidecar index filename, directly under the storage root
pub const INDEX_FILE: &str = ".notekeep-index.json";

/// Extension of note files
pub const NOTE_EXTENSION: &str = "md";

/// Path as a forward-slash string, for platform-independent comparison
pub fn to_posix(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

pub fn same_path(a: &Path, b: &Path) -> bool {
    to_posix(a) == to_posix(b)
}

/// `path` relative to `root` in posix form; `path` itself if outside `root`
pub fn relative_path(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) => to_posix(rel),
        Err(_) => to_posix(path),
    }
}

pub fn has_note_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(NOTE_EXTENSION))
}

/// A note file: `.md` extension and not the sidecar index
pub fn is_note_file(path: &Path) -> bool {
    let is_index = path
        .file_name()
        .is_some_and(|name| name.to_string_lossy() == INDEX_FILE);
    !is_index && has_note_extension(path)
}

/// Absolute path of an index entry's `relative_path`, if it stays under `root`.
///
/// Absolute paths, `..` segments and non-note files are rejected, so a
/// hand-edited index can never point an operation outside the storage root.
pub fn resolve_in_root(root: &Path, relative_path: &str) -> Option<PathBuf> {
    let rel = Path::new(relative_path);
    let mut normal_segments = 0;

    for component in rel.components() {
        match component {
            Component::Normal(_) => normal_segments += 1,
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    if normal_segments == 0 || !is_note_file(rel) {
        return None;
    }

    Some(root.join(rel))
}

/// Pick the file a note should be written to.
///
/// Tries `base.md`, `base-2.md`, `base-3.md`, ... and returns the first
/// candidate that is either `except_path` (the note's current file, so a
/// re-save reuses it) or does not exist yet.
pub fn resolve_unique_path<F: FileSystem + ?Sized>(
    fs: &F,
    target_dir: &Path,
    base_name: &str,
    except_path: Option<&Path>,
) -> PathBuf {
    let mut counter: u32 = 1;

    loop {
        let file_name = if counter == 1 {
            format!("{}.{}", base_name, NOTE_EXTENSION)
        } else {
            format!("{}-{}.{}", base_name, counter, NOTE_EXTENSION)
        };
        let candidate = target_dir.join(file_name);

        if except_path.is_some_and(|except| same_path(&candidate, except)) {
            return candidate;
        }

        if !fs.exists(&candidate) {
            return candidate;
        }

        counter += 1;
    }
}
