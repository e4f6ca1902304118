//! `notekeep list` command - list notes, most recently modified first

use notekeep_core::error::Result;
use notekeep_core::sanitize::{sanitize_folder_path, INBOX_FOLDER};
use notekeep_core::store::NoteStore;
use notekeep_core::Note;

use super::output::{format_millis, print_json, NoteSummary};
use crate::cli::{Cli, OutputFormat};

/// Folder filter in bucket form: `"inbox"` for the root, sanitized otherwise
fn folder_bucket(folder: &str) -> String {
    let folder = sanitize_folder_path(folder);
    if folder.is_empty() {
        INBOX_FOLDER.to_string()
    } else {
        folder
    }
}

pub fn execute(
    cli: &Cli,
    store: &NoteStore,
    folder: Option<&str>,
    query: Option<&str>,
) -> Result<()> {
    let folder = folder.map(folder_bucket);

    let notes: Vec<Note> = store
        .load_all_notes()
        .into_iter()
        .filter(|note| folder.as_ref().is_none_or(|f| &note.folder_path == f))
        .filter(|note| query.is_none_or(|q| note.matches(q)))
        .collect();

    match cli.format {
        OutputFormat::Json => {
            let summaries: Vec<NoteSummary> = notes.iter().map(NoteSummary::from).collect();
            print_json(&summaries)?;
        }
        OutputFormat::Human => {
            if notes.is_empty() && !cli.quiet {
                eprintln!("No notes found");
            }
            for note in &notes {
                println!(
                    "{}  {}  [{}]  {}",
                    note.note_id,
                    format_millis(note.updated_at),
                    note.folder_path,
                    note.title
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_bucket() {
        assert_eq!(folder_bucket(""), "inbox");
        assert_eq!(folder_bucket("inbox"), "inbox");
        assert_eq!(folder_bucket("/work//q1/"), "work/q1");
    }
}
