//! Configuration Model.
//!
//! [`GeneratorConfig`] is loaded once per run by the caller and threaded
//! into every generator call by reference. The core never reads or writes
//! the persisted record itself.

use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    value_objects::{Layer, PageDefaults, PersistencePackage, RetrievalMode, SortSpec},
};

/// Every dotted key accepted by [`GeneratorConfig::get_key`] and
/// [`GeneratorConfig::set_key`].
pub const CONFIG_KEYS: [&str; 9] = [
    "base_package",
    "persistence_package",
    "folders.entity",
    "folders.repository",
    "folders.service",
    "folders.controller",
    "features.pagination_and_sorting",
    "api.default_page_size",
    "api.default_sort",
];

/// Generator configuration.
///
/// No field carries a serde default: a record missing any field fails to
/// deserialize. Merging defaults into a partial record is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub base_package: String,
    pub persistence_package: PersistencePackage,
    pub folders: Folders,
    pub features: Features,
    pub api: ApiDefaults,
}

/// Folder (namespace segment) name per layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folders {
    pub entity: String,
    pub repository: String,
    pub service: String,
    pub controller: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Features {
    pub pagination_and_sorting: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiDefaults {
    pub default_page_size: u32,
    pub default_sort: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_package: "com.example.demo".into(),
            persistence_package: PersistencePackage::Auto,
            folders: Folders::default(),
            features: Features {
                pagination_and_sorting: false,
            },
            api: ApiDefaults {
                default_page_size: 20,
                default_sort: "id,asc".into(),
            },
        }
    }
}

impl Default for Folders {
    fn default() -> Self {
        Self {
            entity: "model".into(),
            repository: "repository".into(),
            service: "service".into(),
            controller: "controller".into(),
        }
    }
}

impl Folders {
    /// Folder configured for `layer`. The service implementation has no
    /// folder of its own; it nests under the service folder.
    pub fn for_layer(&self, layer: Layer) -> &str {
        match layer {
            Layer::Entity => &self.entity,
            Layer::Repository => &self.repository,
            Layer::Service | Layer::ServiceImpl => &self.service,
            Layer::Controller => &self.controller,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.base_package.trim().is_empty() {
            return Err(DomainError::invalid_config(
                "base_package",
                "must not be empty",
            ));
        }

        let folders = [
            ("folders.entity", &self.folders.entity),
            ("folders.repository", &self.folders.repository),
            ("folders.service", &self.folders.service),
            ("folders.controller", &self.folders.controller),
        ];
        for (key, value) in folders {
            if value.trim().is_empty() {
                return Err(DomainError::invalid_config(key, "must not be empty"));
            }
        }

        if self.api.default_page_size == 0 {
            return Err(DomainError::invalid_config(
                "api.default_page_size",
                "must be a positive integer",
            ));
        }

        Ok(())
    }

    pub fn sort_spec(&self) -> SortSpec {
        SortSpec::parse(&self.api.default_sort)
    }

    /// The feature-flag variant every flag-sensitive generator matches on.
    pub fn retrieval_mode(&self) -> RetrievalMode {
        if self.features.pagination_and_sorting {
            RetrievalMode::Paged(PageDefaults {
                size: self.api.default_page_size,
                sort: self.sort_spec(),
            })
        } else {
            RetrievalMode::Collection
        }
    }

    /// Same configuration with `persistence_package` replaced when it is
    /// still `auto`.
    pub fn with_detected_persistence(mut self, detected: Option<&str>) -> Self {
        if let (true, Some(pkg)) = (self.persistence_package.is_auto(), detected) {
            self.persistence_package = PersistencePackage::Explicit(pkg.to_string());
        }
        self
    }

    pub fn get_key(&self, key: &str) -> Result<String, DomainError> {
        let value = match key {
            "base_package" => self.base_package.clone(),
            "persistence_package" => self.persistence_package.to_string(),
            "folders.entity" => self.folders.entity.clone(),
            "folders.repository" => self.folders.repository.clone(),
            "folders.service" => self.folders.service.clone(),
            "folders.controller" => self.folders.controller.clone(),
            "features.pagination_and_sorting" => self.features.pagination_and_sorting.to_string(),
            "api.default_page_size" => self.api.default_page_size.to_string(),
            "api.default_sort" => self.api.default_sort.clone(),
            other => return Err(DomainError::UnknownConfigKey(other.to_string())),
        };
        Ok(value)
    }

    /// Assign `value` to the dotted `key`, parsing it to the field's type.
    pub fn set_key(&mut self, key: &str, value: &str) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidConfigValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        };

        match key {
            "base_package" => self.base_package = value.trim().to_string(),
            "persistence_package" => {
                self.persistence_package = PersistencePackage::from(value.to_string())
            }
            "folders.entity" => self.folders.entity = value.trim().to_string(),
            "folders.repository" => self.folders.repository = value.trim().to_string(),
            "folders.service" => self.folders.service = value.trim().to_string(),
            "folders.controller" => self.folders.controller = value.trim().to_string(),
            "features.pagination_and_sorting" => {
                self.features.pagination_and_sorting = parse_bool(value)
                    .ok_or_else(|| invalid("expected true or false"))?;
            }
            "api.default_page_size" => {
                let size: u32 = value
                    .trim()
                    .parse()
                    .map_err(|_| invalid("expected a positive integer"))?;
                if size == 0 {
                    return Err(invalid("expected a positive integer"));
                }
                self.api.default_page_size = size;
            }
            "api.default_sort" => self.api.default_sort = value.trim().to_string(),
            other => return Err(DomainError::UnknownConfigKey(other.to_string())),
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "on" | "1" => Some(true),
        "false" | "no" | "n" | "off" | "0" => Some(false),
        _ => None,
    }
}
