//! CLI argument parsing for notekeep
//!
//! Supports global flags: --store, --format, --quiet, --verbose

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Notekeep - plain-file note store
#[derive(Parser, Debug)]
#[command(name = "notekeep")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Storage root (overrides the configured one)
    #[arg(long, global = true, env = "NOTEKEEP_STORE")]
    pub store: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. "debug" or "notekeep_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List notes, most recently modified first
    List {
        /// Only notes in this folder ("inbox" for the storage root)
        #[arg(long, short)]
        folder: Option<String>,

        /// Only notes whose title or text contains this (case-insensitive)
        #[arg(long)]
        query: Option<String>,
    },

    /// Show a note
    Show {
        /// Note ID
        id: String,

        /// Print the HTML rendering
        #[arg(long, conflicts_with = "plain")]
        html: bool,

        /// Print the plain-text projection
        #[arg(long)]
        plain: bool,
    },

    /// Save a note under an existing or chosen ID
    Save {
        /// Note ID
        #[arg(long)]
        id: String,

        #[command(flatten)]
        content: ContentArgs,
    },

    /// Save a note under a freshly generated ID
    New(ContentArgs),

    /// Delete a note and its file
    Delete {
        /// Note ID
        id: String,
    },

    /// Reconcile the index with the files on disk
    Reindex,

    /// Import text files as new notes titled after their filenames
    Import {
        /// Files to import
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Folder to import into
        #[arg(long, short)]
        folder: Option<String>,
    },

    /// Write a note's text to a file
    Export {
        /// Note ID
        id: String,

        /// Destination file
        path: PathBuf,
    },

    /// Inspect or change the configured storage root
    Storage {
        #[command(subcommand)]
        command: StorageCommands,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ContentArgs {
    /// Title (used for the filename; derived from the text when omitted)
    #[arg(long, short)]
    pub title: Option<String>,

    /// Folder path under the storage root
    #[arg(long, short)]
    pub folder: Option<String>,

    /// Keep the title as set instead of deriving it from the text
    #[arg(long)]
    pub manual_title: bool,

    /// Read the note text from this file instead of stdin
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum StorageCommands {
    /// Print the storage root in effect
    Get,

    /// Use an existing, writable absolute directory as the storage root
    Set {
        /// Directory to store notes in
        dir: PathBuf,
    },

    /// Go back to the default storage root
    Reset,
}
