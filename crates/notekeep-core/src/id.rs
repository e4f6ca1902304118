//! Note ID generation
//!
//! Two schemes share the `note-` prefix:
//! - adopted files get `note-<12 hex>`, a SHA-256 of their relative path,
//!   so the same file always yields the same id
//! - notes created by a caller get `note-<ulid>`

use sha2::{Digest, Sha256};

/// The standard ID prefix
pub const PREFIX: &str = "note-";

/// Hex chars kept from the path hash
pub const PATH_HASH_LEN: usize = 12;

/// Deterministic id for a file discovered on disk without an index entry.
pub fn id_for_relative_path(relative_path: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(relative_path.as_bytes());
    let full_hex = hex::encode(hasher.finalize());
    format!("{}{}", PREFIX, &full_hex[..PATH_HASH_LEN])
}

/// Fresh id for a brand-new note.
pub fn generate() -> String {
    format!("{}{}", PREFIX, ulid::Ulid::new().to_string().to_lowercase())
}
