//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate the CRUD layers for these entities".

pub mod generation_service;

pub use generation_service::{
    DEFAULT_SOURCE_ROOT, GenerationPlan, GenerationReport, GenerationRequest, GenerationService,
    LayerSelection,
};
