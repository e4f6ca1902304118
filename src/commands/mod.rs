//! CLI commands for notekeep

pub mod delete;
pub mod dispatch;
pub mod export;
pub mod import;
pub mod list;
pub mod output;
pub mod reindex;
pub mod save;
pub mod show;
pub mod storage;
