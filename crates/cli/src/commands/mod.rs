//! Subcommand implementations.

pub mod catalog;
pub mod prefs;
pub mod subscribe;
