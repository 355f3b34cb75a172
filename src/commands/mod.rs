//! Top-level subcommand implementations.

pub mod completions;
pub mod copy;
pub mod list;
pub mod version;
