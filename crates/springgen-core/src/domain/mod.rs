// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for springgen.
//!
//! This module is the layer template engine: configuration model, namespace
//! resolution, reference assembly and the five layer generators.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable inputs**: configuration and namespaces are passed by reference
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod generators;
pub mod references;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    artifact::{LayerArtifact, namespace_dir},
    config::{ApiDefaults, CONFIG_KEYS, Features, Folders, GeneratorConfig},
    namespace::NamespaceMap,
};

pub use error::{DomainError, ErrorCategory};

pub use generators::{LayerContext, ServiceOperation, generate_layer, generate_layer_by_key};
pub use references::{ImportSet, maybe_reference};

pub use value_objects::{
    Layer, PageDefaults, PersistencePackage, RetrievalMode, SortDirection, SortSpec,
};

pub use validation::DomainValidator;
