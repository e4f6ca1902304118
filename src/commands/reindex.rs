//! `notekeep reindex` command - reconcile the index with the files on disk

use notekeep_core::error::Result;
use notekeep_core::store::NoteStore;

use super::output::print_json;
use crate::cli::{Cli, OutputFormat};

pub fn execute(cli: &Cli, store: &NoteStore) -> Result<()> {
    let report = store.reconcile_index()?;

    match cli.format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Human => {
            if cli.quiet {
                return Ok(());
            }
            for id in &report.pruned {
                println!("pruned  {}", id);
            }
            for id in &report.adopted {
                println!("adopted {}", id);
            }
            if !report.changed() {
                println!("Index is up to date");
            }
        }
    }

    Ok(())
}
