//! Line markers of the persisted text format
//!
//! ```text
//! - [x] done
//!   - [ ] nested, two spaces per level
//! :::toggle[open] Summary text
//! inner lines
//! :::
//! ```

use std::sync::OnceLock;

use regex::Regex;

/// Closing line of a toggle block
pub const TOGGLE_CLOSE: &str = ":::";

/// Opening of a code fence; fence contents are never parsed as markers
pub const CODE_FENCE: &str = "```";

/// Spaces per checklist nesting level
pub const INDENT_WIDTH: usize = 2;

static TOGGLE_OPEN_RE: OnceLock<Regex> = OnceLock::new();
static CHECKLIST_RE: OnceLock<Regex> = OnceLock::new();

fn toggle_open_re() -> &'static Regex {
    TOGGLE_OPEN_RE.get_or_init(|| {
        Regex::new(r"(?i)^:::toggle\[(open|closed)\](?:\s+(.*))?$")
            .expect("toggle pattern is valid")
    })
}

fn checklist_re() -> &'static Regex {
    CHECKLIST_RE.get_or_init(|| {
        Regex::new(r"^(\s*)-\s+\[([ xX])\]\s*(.*)$").expect("checklist pattern is valid")
    })
}

/// Parsed `:::toggle[...]` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOpen<'a> {
    pub open: bool,
    pub summary: &'a str,
}

/// Parsed `- [ ]` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistLine<'a> {
    pub depth: usize,
    pub checked: bool,
    pub text: &'a str,
}

/// Match a toggle opening marker. Expects an already-trimmed line.
pub fn parse_toggle_open(trimmed: &str) -> Option<ToggleOpen<'_>> {
    let caps = toggle_open_re().captures(trimmed)?;
    let open = caps
        .get(1)
        .is_some_and(|m| m.as_str().eq_ignore_ascii_case("open"));
    let summary = caps.get(2).map_or("", |m| m.as_str().trim());
    Some(ToggleOpen { open, summary })
}

pub fn is_toggle_close(trimmed: &str) -> bool {
    trimmed == TOGGLE_CLOSE
}

pub fn is_code_fence(trimmed: &str) -> bool {
    trimmed.starts_with(CODE_FENCE)
}

/// Match a checklist line, keeping its leading indentation significant.
///
/// Tabs count as one indent level. Lines like `-[x] a` or `- [xx] a` are
/// not checklist lines.
pub fn parse_checklist(line: &str) -> Option<ChecklistLine<'_>> {
    let caps = checklist_re().captures(line)?;
    let indent = caps.get(1).map_or("", |m| m.as_str());
    let width: usize = indent
        .chars()
        .map(|c| if c == '\t' { INDENT_WIDTH } else { 1 })
        .sum();
    let checked = caps
        .get(2)
        .is_some_and(|m| m.as_str().eq_ignore_ascii_case("x"));
    let text = caps.get(3).map_or("", |m| m.as_str());
    Some(ChecklistLine {
        depth: width / INDENT_WIDTH,
        checked,
        text,
    })
}

/// Replace a checklist marker with its indentation, leaving other lines alone
pub fn strip_checklist_marker(line: &str) -> Option<String> {
    let caps = checklist_re().captures(line)?;
    let indent = caps.get(1).map_or("", |m| m.as_str());
    let text = caps.get(3).map_or("", |m| m.as_str());
    Some(format!("{}{}", indent, text))
}

/// Index of the `:::` line closing the toggle opened at `start`.
///
/// Scans `lines[start..limit]` with a depth counter: every opening marker
/// increments it, every closing marker decrements it, and the match is the
/// first close that brings it back to zero.
pub fn find_toggle_end(lines: &[&str], start: usize, limit: usize) -> Option<usize> {
    let mut depth: usize = 0;

    for (i, line) in lines.iter().enumerate().take(limit).skip(start) {
        let trimmed = line.trim();

        if parse_toggle_open(trimmed).is_some() {
            depth += 1;
            continue;
        }

        if is_toggle_close(trimmed) {
            // Stray close before any open
            if depth == 0 {
                return None;
            }
            depth -= 1;
            if depth == 0 {
                return Some(i);
            }
        }
    }

    None
}

pub fn toggle_open_line(open: bool, summary: &str) -> String {
    let state = if open { "open" } else { "closed" };
    let summary = summary.trim();
    if summary.is_empty() {
        format!(":::toggle[{}]", state)
    } else {
        format!(":::toggle[{}] {}", state, summary)
    }
}

pub fn checklist_line(depth: usize, checked: bool, text: &str) -> String {
    let indent = " ".repeat(depth * INDENT_WIDTH);
    let mark = if checked { 'x' } else { ' ' };
    if text.is_empty() {
        format!("{}- [{}]", indent, mark)
    } else {
        format!("{}- [{}] {}", indent, mark, text)
    }
}
