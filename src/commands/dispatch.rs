//! Command dispatch logic for notekeep

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use notekeep_core::config::AppConfig;
use notekeep_core::error::Result;
use notekeep_core::store::NoteStore;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands;

/// Storage root for this invocation: `--store`, else the configured root
pub fn resolve_storage_root(cli: &Cli) -> PathBuf {
    let root = match &cli.store {
        Some(path) => path.clone(),
        None => AppConfig::load().effective_storage_dir(),
    };

    if root.is_absolute() {
        root
    } else {
        env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(root)
    }
}

fn open_store(cli: &Cli, start: Instant) -> Result<NoteStore> {
    let root = resolve_storage_root(cli);
    let store = NoteStore::open(&root)?;
    debug!(elapsed = ?start.elapsed(), root = %root.display(), "open_store");
    Ok(store)
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let Some(command) = &cli.command else {
        println!("notekeep {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Run `notekeep --help` for usage information.");
        return Ok(());
    };

    let store = || open_store(cli, start);

    let result = match command {
        Commands::List { folder, query } => {
            commands::list::execute(cli, &store()?, folder.as_deref(), query.as_deref())
        }
        Commands::Show { id, html, plain } => {
            commands::show::execute(cli, &store()?, id, *html, *plain)
        }
        Commands::Save { id, content } => {
            commands::save::execute(cli, &store()?, Some(id.as_str()), content)
        }
        Commands::New(content) => commands::save::execute(cli, &store()?, None, content),
        Commands::Delete { id } => commands::delete::execute(cli, &store()?, id),
        Commands::Reindex => commands::reindex::execute(cli, &store()?),
        Commands::Import { files, folder } => {
            commands::import::execute(cli, &store()?, files, folder.as_deref())
        }
        Commands::Export { id, path } => commands::export::execute(cli, &store()?, id, path),
        Commands::Storage { command } => commands::storage::execute(cli, command),
    };

    debug!(elapsed = ?start.elapsed(), "execute_command");
    result
}
