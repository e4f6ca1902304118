//! `notekeep import` command - turn text files into notes

use std::path::PathBuf;

use notekeep_core::error::Result;
use notekeep_core::store::{read_text_file, title_from_filename, NoteStore};
use notekeep_core::{SaveRequest, SaveResult};

use super::output::print_json;
use crate::cli::{Cli, OutputFormat};

/// Each file becomes a new note titled after its filename.
///
/// Stops at the first unreadable file; notes already imported stay.
pub fn execute(
    cli: &Cli,
    store: &NoteStore,
    files: &[PathBuf],
    folder: Option<&str>,
) -> Result<()> {
    let mut results: Vec<SaveResult> = Vec::with_capacity(files.len());

    for path in files {
        let text = read_text_file(path)?;
        let request = SaveRequest::new("", title_from_filename(path), text)
            .in_folder(folder.unwrap_or_default())
            .manual_title(true);
        let result = store.create_note(request)?;
        tracing::debug!(source = %path.display(), note_id = %result.note_id, "imported");
        results.push(result);
    }

    match cli.format {
        OutputFormat::Json => print_json(&results)?,
        OutputFormat::Human => {
            for result in &results {
                println!("{}", result.note_id);
            }
        }
    }

    Ok(())
}
