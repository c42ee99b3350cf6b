//! Layer template engine.
//!
//! One generator per [`Layer`], each a pure function of
//! ([`LayerContext`]) → source text. [`generate_layer`] is the single entry
//! point: it validates the configuration once and dispatches.
//!
//! ## Output shape
//!
//! ```text
//! package <namespace>;
//!
//! <framework imports>
//! <cross-layer references>   ← only for types in another namespace
//!
//! <body>
//! ```

pub mod controller;
pub mod entity;
pub mod fragments;
pub mod operations;
pub mod repository;
pub mod service;
pub mod service_impl;

use std::str::FromStr;

use tracing::{debug, instrument};

pub use fragments::LayerContext;
pub use operations::{HttpVerb, ServiceOperation};

use crate::domain::{
    entities::{GeneratorConfig, LayerArtifact, NamespaceMap},
    error::DomainError,
    value_objects::{Layer, RetrievalMode},
};

/// Imports the collection-retrieval operation needs in the service layers.
pub(crate) fn retrieval_imports(mode: &RetrievalMode) -> &'static [&'static str] {
    match mode {
        RetrievalMode::Collection => &["java.util.List"],
        RetrievalMode::Paged(_) => &[
            "org.springframework.data.domain.Page",
            "org.springframework.data.domain.Pageable",
        ],
    }
}

/// Render `layer` for `entity` without validating the configuration.
pub fn render(ctx: &LayerContext<'_>) -> String {
    match ctx.layer {
        Layer::Entity => entity::render(ctx),
        Layer::Repository => repository::render(ctx),
        Layer::Service => service::render(ctx),
        Layer::ServiceImpl => service_impl::render(ctx),
        Layer::Controller => controller::render(ctx),
    }
}

/// Generate one artifact.
///
/// Fails only when `config` is invalid; the entity name is used verbatim.
#[instrument(skip_all, fields(layer = %layer, entity = %entity))]
pub fn generate_layer(
    layer: Layer,
    entity: &str,
    namespaces: &NamespaceMap,
    config: &GeneratorConfig,
) -> Result<LayerArtifact, DomainError> {
    config.validate()?;

    let ctx = LayerContext::new(layer, entity, namespaces, config);
    let source = render(&ctx);
    debug!(bytes = source.len(), "Layer rendered");

    Ok(LayerArtifact {
        layer,
        entity: entity.to_string(),
        namespace: ctx.namespace().to_string(),
        type_name: ctx.type_name(),
        source,
    })
}

/// Like [`generate_layer`], with the layer given by its key.
pub fn generate_layer_by_key(
    key: &str,
    entity: &str,
    namespaces: &NamespaceMap,
    config: &GeneratorConfig,
) -> Result<LayerArtifact, DomainError> {
    let layer = Layer::from_str(key)?;
    generate_layer(layer, entity, namespaces, config)
}
