//! Infrastructure adapters for springgen.
//!
//! This crate implements the ports defined in `springgen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod config_store;
pub mod filesystem;
pub mod pom;

// Re-export commonly used adapters
pub use config_store::JsonConfigStore;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use pom::detect_persistence_package;
