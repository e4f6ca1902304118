//! `notekeep storage` commands - inspect or change the configured storage root

use notekeep_core::config::{default_storage_dir, AppConfig};
use notekeep_core::error::Result;

use super::dispatch::resolve_storage_root;
use super::output::print_json;
use crate::cli::{Cli, OutputFormat, StorageCommands};

pub fn execute(cli: &Cli, command: &StorageCommands) -> Result<()> {
    let mut config = AppConfig::load();

    match command {
        StorageCommands::Get => {}
        StorageCommands::Set { dir } => {
            config.set_storage_dir(Some(dir))?;
            config.save()?;
            tracing::debug!(dir = %dir.display(), "storage root set");
        }
        StorageCommands::Reset => {
            config.set_storage_dir(None)?;
            config.save()?;
        }
    }

    let effective = resolve_storage_root(cli);
    let custom = config.custom_storage_dir();

    match cli.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "effective": effective,
            "custom": custom,
            "default": default_storage_dir(),
            "configSource": AppConfig::source_display(),
        }))?,
        OutputFormat::Human => {
            println!("{}", effective.display());
            if !cli.quiet && custom.is_none() && cli.store.is_none() {
                eprintln!("(default location)");
            }
        }
    }

    Ok(())
}
