pub mod artifact;
pub mod config;
pub mod namespace;

pub use crate::domain::DomainError;
pub use artifact::LayerArtifact;
pub use config::GeneratorConfig;
pub use namespace::NamespaceMap;
