//! Direct file primitives for callers that work with paths rather than ids

use std::fs;
use std::path::{Path, PathBuf};

use crate::convert::{FALLBACK_TITLE, MAX_TITLE_CHARS};
use crate::error::{NoteError, Result};
use crate::paths::{has_note_extension, NOTE_EXTENSION};
use crate::text::{to_crlf, truncate_chars};

fn require_note_extension(path: &Path) -> Result<()> {
    if !has_note_extension(path) {
        let ext = path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default();
        crate::bail_unsupported!("file extension", format!("{:?}", ext), NOTE_EXTENSION);
    }
    Ok(())
}

/// Write `text` to a `.md` file with CRLF line endings
pub fn write_markdown_file(path: &Path, text: &str) -> Result<()> {
    require_note_extension(path)?;
    fs::write(path, to_crlf(text))
        .map_err(|e| NoteError::io_operation("write", path.display(), e))
}

pub fn read_markdown_file(path: &Path) -> Result<String> {
    require_note_extension(path)?;
    fs::read_to_string(path).map_err(|e| NoteError::io_operation("read", path.display(), e))
}

/// `.md` files directly inside `dir`, sorted by name
pub fn list_markdown_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_file() && has_note_extension(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

pub fn read_text_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| NoteError::io_operation("read", path.display(), e))
}

/// Write `text` with CRLF line endings, creating parent directories
pub fn save_text_file(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| NoteError::io_operation("create directory", parent.display(), e))?;
    }
    fs::write(path, to_crlf(text)).map_err(|e| NoteError::io_operation("write", path.display(), e))
}

/// Title for an imported file: its stem, trimmed and capped
pub fn title_from_filename(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let title = truncate_chars(stem.trim(), MAX_TITLE_CHARS);
    if title.is_empty() {
        FALLBACK_TITLE.to_string()
    } else {
        title
    }
}
