//! `notekeep delete` command - remove a note and its file

use notekeep_core::error::{NoteError, Result};
use notekeep_core::store::NoteStore;

use super::output::print_json;
use crate::cli::{Cli, OutputFormat};

pub fn execute(cli: &Cli, store: &NoteStore, id: &str) -> Result<()> {
    let path = store
        .delete_note(id)?
        .ok_or_else(|| NoteError::NoteNotFound { id: id.to_string() })?;

    match cli.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "noteId": id,
            "filePath": path,
        }))?,
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Deleted {}", path.display());
            }
        }
    }

    Ok(())
}
