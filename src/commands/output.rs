//! Shared output helpers

use chrono::{DateTime, Local};
use serde::Serialize;

use notekeep_core::error::Result;
use notekeep_core::Note;

/// Milliseconds since the epoch as local `YYYY-MM-DD HH:MM`
pub fn format_millis(millis: i64) -> String {
    match DateTime::from_timestamp_millis(millis) {
        Some(utc) => utc.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        None => "-".to_string(),
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Note listing without the body, for `list` output
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteSummary<'a> {
    pub note_id: &'a str,
    pub title: &'a str,
    pub is_title_manual: bool,
    pub folder_path: &'a str,
    pub created_at: i64,
    pub updated_at: i64,
    pub file_path: &'a std::path::Path,
}

impl<'a> From<&'a Note> for NoteSummary<'a> {
    fn from(note: &'a Note) -> Self {
        NoteSummary {
            note_id: &note.note_id,
            title: &note.title,
            is_title_manual: note.is_title_manual,
            folder_path: &note.folder_path,
            created_at: note.created_at,
            updated_at: note.updated_at,
            file_path: &note.file_path,
        }
    }
}
