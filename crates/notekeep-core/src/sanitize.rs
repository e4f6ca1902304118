//! Path and identifier sanitization
//!
//! Every user-controlled string that ends up as a path segment passes
//! through here first. The allowed character set is fixed and does not
//! depend on the host OS.

use std::sync::OnceLock;

use regex::Regex;

/// Folder bucket name meaning "stored at the storage root"
pub const INBOX_FOLDER: &str = "inbox";

/// Fallback identifier when sanitization leaves nothing
pub const FALLBACK_NOTE_ID: &str = "note";

/// Fallback file stem when a title slugifies to nothing
pub const FALLBACK_SLUG: &str = "untitled";

/// Maximum length of a slugified file stem, in characters
pub const MAX_SLUG_CHARS: usize = 80;

static UNSAFE_FILENAME_RE: OnceLock<Regex> = OnceLock::new();
static WHITESPACE_RE: OnceLock<Regex> = OnceLock::new();

fn unsafe_filename_re() -> &'static Regex {
    UNSAFE_FILENAME_RE.get_or_init(|| {
        Regex::new(r#"[<>:"/\\|?*\x00-\x1F\x7F]"#).expect("unsafe filename pattern is valid")
    })
}

fn whitespace_re() -> &'static Regex {
    WHITESPACE_RE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

fn is_safe_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

fn strip_unsafe(segment: &str) -> String {
    segment.chars().filter(|c| is_safe_char(*c)).collect()
}

/// Reduce a note identifier to `[A-Za-z0-9_-]`, falling back to `"note"`.
pub fn sanitize_identifier(raw: &str) -> String {
    try_sanitize_identifier(raw).unwrap_or_else(|| FALLBACK_NOTE_ID.to_string())
}

/// Like [`sanitize_identifier`] but `None` when nothing safe remains.
///
/// Lookups use this so that garbage input never aliases the fallback id.
pub fn try_sanitize_identifier(raw: &str) -> Option<String> {
    let safe = strip_unsafe(raw);
    if safe.is_empty() {
        None
    } else {
        Some(safe)
    }
}

/// Normalize a user-supplied folder path into `seg/seg/...` form.
///
/// Both `/` and `\` separate segments. Empty segments are dropped. The
/// result is empty when the folder means "storage root", including the
/// reserved [`INBOX_FOLDER`] bucket name.
pub fn sanitize_folder_path(raw: &str) -> String {
    let segments: Vec<String> = raw
        .split(['/', '\\'])
        .map(strip_unsafe)
        .filter(|s| !s.is_empty())
        .collect();

    // Leading inbox segments name the bucket, not a real directory
    let skip = segments
        .iter()
        .take_while(|s| s.as_str() == INBOX_FOLDER)
        .count();

    segments[skip..].join("/")
}

/// Turn a note title into a filename stem (without extension).
///
/// The result is lowercased so that renames which only change case do not
/// collide on case-insensitive filesystems.
pub fn slugify_title(title: &str) -> String {
    let stripped = unsafe_filename_re().replace_all(title.trim(), "");
    let hyphenated = whitespace_re().replace_all(stripped.trim(), "-");
    let slug: String = hyphenated
        .trim_end_matches('.')
        .to_lowercase()
        .chars()
        .take(MAX_SLUG_CHARS)
        .collect();
    let slug = slug.trim_end_matches('.');

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}
