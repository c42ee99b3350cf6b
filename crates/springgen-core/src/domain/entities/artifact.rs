use std::path::PathBuf;

use crate::domain::value_objects::Layer;

/// File extension of every generated source file.
pub const SOURCE_EXTENSION: &str = "java";

/// One finished unit of generated source text.
///
/// Created fresh per (entity, layer) pair and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerArtifact {
    pub layer: Layer,
    pub entity: String,
    pub namespace: String,
    pub type_name: String,
    pub source: String,
}

impl LayerArtifact {
    pub fn file_name(&self) -> String {
        format!("{}.{SOURCE_EXTENSION}", self.type_name)
    }

    /// Path of the file relative to the source root
    /// (`com.example.model` + `Order` → `com/example/model/Order.java`).
    pub fn relative_path(&self) -> PathBuf {
        namespace_dir(&self.namespace).join(self.file_name())
    }
}

/// Directory a namespace maps to, relative to the source root.
pub fn namespace_dir(namespace: &str) -> PathBuf {
    namespace
        .split('.')
        .filter(|segment| !segment.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_path_follows_namespace() {
        let artifact = LayerArtifact {
            layer: Layer::ServiceImpl,
            entity: "Order".into(),
            namespace: "com.example.demo.service.impl".into(),
            type_name: "OrderServiceImpl".into(),
            source: String::new(),
        };

        assert_eq!(artifact.file_name(), "OrderServiceImpl.java");
        assert_eq!(
            artifact.relative_path(),
            PathBuf::from("com/example/demo/service/impl/OrderServiceImpl.java")
        );
    }
}
