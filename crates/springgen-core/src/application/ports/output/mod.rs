//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `springgen-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::GeneratorConfig;
use crate::error::SpringgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `springgen_adapters::filesystem::LocalFilesystem` (production)
/// - `springgen_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SpringgenResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> SpringgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the persisted generator configuration.
///
/// Implemented by:
/// - `springgen_adapters::config_store::JsonConfigStore`
pub trait ConfigStore: Send + Sync {
    /// Location of the backing record.
    fn path(&self) -> PathBuf;

    /// Create the record with defaults when it does not exist yet.
    /// Returns `true` if it was created.
    fn ensure_exists(&self) -> SpringgenResult<bool>;

    /// Read and parse the record.
    fn load(&self) -> SpringgenResult<GeneratorConfig>;

    /// Replace the record.
    fn save(&self, config: &GeneratorConfig) -> SpringgenResult<()>;
}
