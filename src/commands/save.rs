//! `notekeep save` / `notekeep new` commands - write a note from a file or stdin

use std::io::{self, Read};

use notekeep_core::error::{NoteError, Result};
use notekeep_core::store::{read_text_file, NoteStore};
use notekeep_core::SaveRequest;

use super::output::print_json;
use crate::cli::{Cli, ContentArgs, OutputFormat};

fn read_content(args: &ContentArgs) -> Result<String> {
    match &args.file {
        Some(path) => read_text_file(path),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| NoteError::io_operation("read", "stdin", e))?;
            Ok(text)
        }
    }
}

/// Save under `id`, or under a fresh id when `id` is `None`
pub fn execute(cli: &Cli, store: &NoteStore, id: Option<&str>, args: &ContentArgs) -> Result<()> {
    let text = read_content(args)?;

    let request = SaveRequest::new(
        id.unwrap_or_default(),
        args.title.clone().unwrap_or_default(),
        text,
    )
    .in_folder(args.folder.clone().unwrap_or_default())
    .manual_title(args.manual_title);

    let result = match id {
        Some(_) => store.save_note(&request)?,
        None => store.create_note(request)?,
    };

    match cli.format {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Human => {
            println!("{}", result.note_id);
            if !cli.quiet {
                eprintln!("Saved {}", result.file_path.display());
            }
        }
    }

    Ok(())
}
