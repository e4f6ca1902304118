//! `notekeep show` command - print one note

use notekeep_core::error::{NoteError, Result};
use notekeep_core::store::NoteStore;

use super::output::{format_millis, print_json};
use crate::cli::{Cli, OutputFormat};

pub fn execute(cli: &Cli, store: &NoteStore, id: &str, html: bool, plain: bool) -> Result<()> {
    let note = store
        .load_note(id)
        .ok_or_else(|| NoteError::NoteNotFound { id: id.to_string() })?;

    if cli.format == OutputFormat::Json {
        let mut value = serde_json::to_value(&note)?;
        if html {
            value["html"] = serde_json::Value::String(note.html());
        }
        return print_json(&value);
    }

    if html {
        println!("{}", note.html());
    } else if plain {
        println!("{}", note.plain_text);
    } else {
        if !cli.quiet {
            println!("# {}", note.title);
            println!(
                "id: {}  folder: {}  updated: {}",
                note.note_id,
                note.folder_path,
                format_millis(note.updated_at)
            );
            println!();
        }
        println!("{}", note.text);
    }

    Ok(())
}
