//! Namespace Resolver.

use std::collections::BTreeSet;

use tracing::debug;

use crate::domain::{entities::config::GeneratorConfig, value_objects::Layer};

/// Nested segment the service implementation lives under in layered mode.
pub const IMPL_SEGMENT: &str = "impl";

/// Resolved namespace per layer.
///
/// Built once per run by [`NamespaceMap::resolve`] and read-only afterwards.
/// Every layer always has an entry, so lookups cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceMap {
    entity: String,
    repository: String,
    service: String,
    service_impl: String,
    controller: String,
}

impl NamespaceMap {
    /// Compute the namespace of every layer.
    ///
    /// A non-empty `single_folder` puts all five layers in
    /// `base_package.<single_folder>`, the service implementation included.
    /// Otherwise each layer gets `base_package.<folder>` and the service
    /// implementation nests one segment below the service namespace. The
    /// override is taken as-is; no identifier validation happens here.
    pub fn resolve(config: &GeneratorConfig, single_folder: Option<&str>) -> Self {
        let base = config.base_package.as_str();

        let map = match single_folder.map(str::trim).filter(|s| !s.is_empty()) {
            Some(folder) => Self::flat(format!("{base}.{folder}")),
            None => {
                let folders = &config.folders;
                let service = format!("{base}.{}", folders.for_layer(Layer::Service));
                Self {
                    entity: format!("{base}.{}", folders.for_layer(Layer::Entity)),
                    repository: format!("{base}.{}", folders.for_layer(Layer::Repository)),
                    service_impl: format!("{service}.{IMPL_SEGMENT}"),
                    service,
                    controller: format!("{base}.{}", folders.for_layer(Layer::Controller)),
                }
            }
        };

        debug!(?map, "Namespaces resolved");
        map
    }

    /// All five layers in one namespace.
    pub fn flat(namespace: impl Into<String>) -> Self {
        let namespace = namespace.into();
        Self {
            entity: namespace.clone(),
            repository: namespace.clone(),
            service: namespace.clone(),
            service_impl: namespace.clone(),
            controller: namespace,
        }
    }

    pub fn get(&self, layer: Layer) -> &str {
        match layer {
            Layer::Entity => &self.entity,
            Layer::Repository => &self.repository,
            Layer::Service => &self.service,
            Layer::ServiceImpl => &self.service_impl,
            Layer::Controller => &self.controller,
        }
    }

    /// `(layer, namespace)` pairs in generation order.
    pub fn iter(&self) -> impl Iterator<Item = (Layer, &str)> {
        Layer::ALL.into_iter().map(|layer| (layer, self.get(layer)))
    }

    /// Distinct namespaces, sorted.
    pub fn distinct(&self) -> BTreeSet<&str> {
        self.iter().map(|(_, ns)| ns).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layered_mode_uses_folders() {
        let map = NamespaceMap::resolve(&GeneratorConfig::default(), None);

        assert_eq!(map.get(Layer::Entity), "com.example.demo.model");
        assert_eq!(map.get(Layer::Repository), "com.example.demo.repository");
        assert_eq!(map.get(Layer::Service), "com.example.demo.service");
        assert_eq!(map.get(Layer::ServiceImpl), "com.example.demo.service.impl");
        assert_eq!(map.get(Layer::Controller), "com.example.demo.controller");
        assert_eq!(map.distinct().len(), 5);
    }

    #[test]
    fn single_folder_collapses_every_layer() {
        let map = NamespaceMap::resolve(&GeneratorConfig::default(), Some("orders"));

        for (_, ns) in map.iter() {
            assert_eq!(ns, "com.example.demo.orders");
        }
        assert_eq!(map.distinct().len(), 1);
    }

    #[test]
    fn blank_single_folder_means_layered() {
        let map = NamespaceMap::resolve(&GeneratorConfig::default(), Some("   "));
        assert_eq!(map, NamespaceMap::resolve(&GeneratorConfig::default(), None));
    }

    #[test]
    fn override_is_not_validated() {
        let map = NamespaceMap::resolve(&GeneratorConfig::default(), Some("not a-package!"));
        assert_eq!(map.get(Layer::Entity), "com.example.demo.not a-package!");
    }

    #[test]
    fn distinct_namespaces_layered() {
        let map = NamespaceMap::resolve(&GeneratorConfig::default(), None);
        assert_eq!(map.distinct().len(), 5);
    }
}
