// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to hand across layers)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid configuration: {field}: {reason}")]
    InvalidConfiguration { field: String, reason: String },

    #[error("Invalid value '{value}' for '{key}': {reason}")]
    InvalidConfigValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("Unknown layer '{0}'")]
    UnknownLayer(String),

    // ========================================================================
    // Not Found Errors (404-level equivalent)
    // ========================================================================
    #[error("Unknown configuration key '{0}'")]
    UnknownConfigKey(String),
}

impl DomainError {
    pub(crate) fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidConfiguration { field, .. } => vec![
                format!("Fix '{}' in your springgen configuration", field),
                "Inspect it with: springgen config show".into(),
            ],
            Self::InvalidConfigValue { key, .. } => vec![
                format!("'{}' expects a different kind of value", key),
                "Booleans are true/false, page sizes are positive integers".into(),
            ],
            Self::UnknownLayer(_) => vec![
                "Known layers:".into(),
                "  • entity, repository, service, service_impl, controller".into(),
            ],
            Self::UnknownConfigKey(_) => vec![
                "Known keys:".into(),
                "  • base_package, persistence_package".into(),
                "  • folders.entity, folders.repository, folders.service, folders.controller"
                    .into(),
                "  • features.pagination_and_sorting".into(),
                "  • api.default_page_size, api.default_sort".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidConfiguration { .. } => ErrorCategory::Configuration,
            Self::InvalidConfigValue { .. } | Self::UnknownLayer(_) => ErrorCategory::Validation,
            Self::UnknownConfigKey(_) => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    NotFound,
    Internal,
}
