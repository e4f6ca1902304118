//! `notekeep export` command - write a note's text to an arbitrary file

use std::path::Path;

use notekeep_core::error::{NoteError, Result};
use notekeep_core::store::{save_text_file, NoteStore};

use super::output::print_json;
use crate::cli::{Cli, OutputFormat};

pub fn execute(cli: &Cli, store: &NoteStore, id: &str, path: &Path) -> Result<()> {
    let note = store
        .load_note(id)
        .ok_or_else(|| NoteError::NoteNotFound { id: id.to_string() })?;

    save_text_file(path, &note.text)?;

    match cli.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "noteId": note.note_id,
            "path": path,
        }))?,
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Exported {} to {}", note.note_id, path.display());
            }
        }
    }

    Ok(())
}
