//! Application layer errors.
//!
//! These errors represent failures in orchestration, not template logic.
//! Template and configuration errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No usable entity name was supplied.
    #[error("No entity names given")]
    NoEntities,

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The persisted configuration could not be read, parsed or written.
    #[error("Configuration store error at {path}: {reason}")]
    ConfigStore { path: PathBuf, reason: String },

    /// Shared state lock was poisoned.
    #[error("Lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NoEntities => vec![
                "You must provide at least one entity name".into(),
                "Example: springgen generate Order Customer".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::ConfigStore { path, .. } => vec![
                format!("Check the configuration file at {}", path.display()),
                "Recreate it with: springgen config init --force".into(),
            ],
            Self::LockPoisoned => vec!["This is a bug, please report it".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NoEntities => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::LockPoisoned => ErrorCategory::Internal,
            Self::ConfigStore { .. } => ErrorCategory::Configuration,
        }
    }
}
