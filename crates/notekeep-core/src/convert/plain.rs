//! Plain-text projection and title derivation

use std::sync::OnceLock;

use regex::Regex;

use super::markers::{is_toggle_close, parse_toggle_open, strip_checklist_marker};
use crate::text::{normalize_newlines, truncate_chars};

/// Title used when nothing visible can be derived
pub const FALLBACK_TITLE: &str = "Untitled";

/// Maximum title length, in characters
pub const MAX_TITLE_CHARS: usize = 50;

static HEADING_PREFIX_RE: OnceLock<Regex> = OnceLock::new();

fn heading_prefix_re() -> &'static Regex {
    HEADING_PREFIX_RE
        .get_or_init(|| Regex::new(r"^#{1,3}\s+").expect("heading prefix pattern is valid"))
}

/// Project persisted text to what a reader sees, for preview and search.
///
/// Checklist brackets and toggle markers are removed, toggle summaries are
/// kept, code fences pass through. Trailing whitespace is trimmed.
pub fn to_plain_text(text: &str) -> String {
    let normalized = normalize_newlines(text);
    let lines: Vec<String> = normalized
        .split('\n')
        .map(|line| {
            let trimmed = line.trim();

            if let Some(toggle) = parse_toggle_open(trimmed) {
                return toggle.summary.to_string();
            }
            if is_toggle_close(trimmed) {
                return String::new();
            }

            strip_checklist_marker(line).unwrap_or_else(|| line.to_string())
        })
        .collect();

    lines.join("\n").trim_end().to_string()
}

/// Derive a note title from its persisted text.
///
/// First non-blank line of the plain-text projection, minus any leading
/// `#`/`##`/`###` prefix, capped at [`MAX_TITLE_CHARS`].
pub fn derive_title(text: &str) -> String {
    let plain = to_plain_text(text);
    let first_line = plain.lines().map(str::trim).find(|line| !line.is_empty());

    let Some(first_line) = first_line else {
        return FALLBACK_TITLE.to_string();
    };

    let stripped = heading_prefix_re().replace(first_line, "");
    let title = truncate_chars(stripped.trim(), MAX_TITLE_CHARS);

    if title.is_empty() {
        FALLBACK_TITLE.to_string()
    } else {
        title
    }
}
