//! Subcommand handlers. Each module exposes one `execute` entry point.

pub mod completions;
pub mod config;
pub mod generate;
pub mod preview;
