//! Springgen Core - Layer Template Engine
//!
//! This crate provides the domain and application layers for the springgen
//! CRUD boilerplate generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          springgen-cli (CLI)            │
//! │   (prompts, config layering, output)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │          (GenerationService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │      (Driven: Filesystem, ConfigStore)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   springgen-adapters (Infrastructure)   │
//! │ (LocalFilesystem, JsonConfigStore, pom) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (GeneratorConfig, NamespaceMap, layers) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use springgen_core::domain::{GeneratorConfig, Layer, NamespaceMap, generate_layer};
//!
//! let config = GeneratorConfig::default();
//! let namespaces = NamespaceMap::resolve(&config, None);
//!
//! let artifact = generate_layer(Layer::Service, "Order", &namespaces, &config).unwrap();
//! assert!(artifact.source.contains("public interface OrderService"));
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerationPlan, GenerationReport, GenerationRequest, GenerationService, LayerSelection,
        ports::{ConfigStore, Filesystem},
    };
    pub use crate::domain::{
        GeneratorConfig, Layer, LayerArtifact, NamespaceMap, RetrievalMode, generate_layer,
        generate_layer_by_key,
    };
    pub use crate::error::{SpringgenError, SpringgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
