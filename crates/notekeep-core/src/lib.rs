//! Notekeep Core Library
//!
//! File-backed note storage: the text format notes are persisted in, the
//! sidecar index mapping stable note ids to files, and the load/save/delete
//! operations built on them.

pub mod config;
pub mod convert;
pub mod error;
pub mod fs;
pub mod id;
pub mod index;
pub mod logging;
pub mod note;
pub mod paths;
pub mod sanitize;
pub mod store;
pub mod text;
pub mod time;

pub use error::{NoteError, Result};
pub use note::{Note, SaveRequest, SaveResult};
pub use store::NoteStore;
