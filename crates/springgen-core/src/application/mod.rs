//! Application layer for springgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerationService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! template logic itself. All rendering rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    DEFAULT_SOURCE_ROOT, GenerationPlan, GenerationReport, GenerationRequest, GenerationService,
    LayerSelection,
};

// Re-export port traits (for adapter implementation)
pub use ports::{ConfigStore, Filesystem};

pub use error::ApplicationError;
