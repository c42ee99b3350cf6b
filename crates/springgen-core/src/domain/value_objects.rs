//! Domain value objects: Layer, SortDirection, SortSpec, PersistencePackage,
//! RetrievalMode.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity. This
//! file defines the types, their string representations, and their
//! `FromStr` parsers. Rendering logic lives in `generators`.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Layer ────────────────────────────────────────────────────────────────────

/// One of the five generated source roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    Entity,
    Repository,
    Service,
    ServiceImpl,
    Controller,
}

impl Layer {
    /// Every layer, in generation order.
    pub const ALL: [Layer; 5] = [
        Self::Entity,
        Self::Repository,
        Self::Service,
        Self::ServiceImpl,
        Self::Controller,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::Repository => "repository",
            Self::Service => "service",
            Self::ServiceImpl => "service_impl",
            Self::Controller => "controller",
        }
    }

    const fn type_suffix(&self) -> &'static str {
        match self {
            Self::Entity => "",
            Self::Repository => "Repository",
            Self::Service => "Service",
            Self::ServiceImpl => "ServiceImpl",
            Self::Controller => "Controller",
        }
    }

    /// Name of the type this layer declares for `entity`.
    pub fn type_name(&self, entity: &str) -> String {
        format!("{entity}{}", self.type_suffix())
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layer {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "entity" => Ok(Self::Entity),
            "repository" => Ok(Self::Repository),
            "service" => Ok(Self::Service),
            "service_impl" | "service-impl" | "serviceimpl" => Ok(Self::ServiceImpl),
            "controller" => Ok(Self::Controller),
            other => Err(DomainError::UnknownLayer(other.to_string())),
        }
    }
}

// ── Sorting ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Lenient parse: anything that is not `desc` is ascending.
    pub fn parse_lenient(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("desc") {
            Self::Desc
        } else {
            Self::Asc
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed form of `api.default_sort` (`"<field>,<asc|desc>"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SortSpec {
    pub field: Option<String>,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Never fails: a missing field stays `None`, an unrecognised direction
    /// becomes ascending.
    pub fn parse(raw: &str) -> Self {
        let (field, direction) = match raw.split_once(',') {
            Some((field, direction)) => (field, SortDirection::parse_lenient(direction)),
            None => (raw, SortDirection::Asc),
        };

        let field = field.trim();
        Self {
            field: (!field.is_empty()).then(|| field.to_string()),
            direction,
        }
    }
}

// ── Persistence ──────────────────────────────────────────────────────────────

/// Persistence dialect the data-model layer imports annotations from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PersistencePackage {
    /// Decided by the caller (usually from `pom.xml`), otherwise Jakarta.
    #[default]
    Auto,
    Explicit(String),
}

impl PersistencePackage {
    pub const JAKARTA: &'static str = "jakarta.persistence";
    pub const JAVAX: &'static str = "javax.persistence";

    /// Package to import from. `Auto` falls back to Jakarta Persistence.
    pub fn resolve(&self) -> &str {
        match self {
            Self::Auto => Self::JAKARTA,
            Self::Explicit(pkg) => pkg,
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }
}

impl From<String> for PersistencePackage {
    fn from(value: String) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("auto") {
            Self::Auto
        } else {
            Self::Explicit(trimmed.to_string())
        }
    }
}

impl From<PersistencePackage> for String {
    fn from(value: PersistencePackage) -> Self {
        value.to_string()
    }
}

impl fmt::Display for PersistencePackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Explicit(pkg) => f.write_str(pkg),
        }
    }
}

// ── RetrievalMode ────────────────────────────────────────────────────────────

/// Default pageable request bound on the paged controller endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageDefaults {
    pub size: u32,
    pub sort: SortSpec,
}

/// How the collection-retrieval operation is shaped across the service,
/// service-implementation and controller layers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RetrievalMode {
    /// `List<E> getAll()`
    Collection,
    /// `Page<E> getPage(Pageable pageable)`
    Paged(PageDefaults),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_parses_keys_and_aliases() {
        assert_eq!(Layer::from_str("entity").unwrap(), Layer::Entity);
        assert_eq!(Layer::from_str("Service_Impl").unwrap(), Layer::ServiceImpl);
        assert_eq!(Layer::from_str("service-impl").unwrap(), Layer::ServiceImpl);
        assert_eq!(
            Layer::from_str("dto"),
            Err(DomainError::UnknownLayer("dto".into()))
        );
    }

    #[test]
    fn layer_type_names() {
        assert_eq!(Layer::Entity.type_name("Order"), "Order");
        assert_eq!(Layer::ServiceImpl.type_name("Order"), "OrderServiceImpl");
        assert_eq!(Layer::Controller.type_name("Order"), "OrderController");
    }

    #[test]
    fn sort_spec_full() {
        let spec = SortSpec::parse("name,desc");
        assert_eq!(spec.field.as_deref(), Some("name"));
        assert_eq!(spec.direction, SortDirection::Desc);
    }

    #[test]
    fn sort_spec_defaults_to_ascending() {
        assert_eq!(SortSpec::parse("id").direction, SortDirection::Asc);
        assert_eq!(SortSpec::parse("id,sideways").direction, SortDirection::Asc);
        assert_eq!(SortSpec::parse("id,DESC").direction, SortDirection::Desc);
    }

    #[test]
    fn sort_spec_field_is_optional() {
        let spec = SortSpec::parse(",desc");
        assert_eq!(spec.field, None);
        assert_eq!(spec.direction, SortDirection::Desc);
        assert_eq!(SortSpec::parse(""), SortSpec::default());
    }

    #[test]
    fn persistence_package_auto_resolves_to_jakarta() {
        assert_eq!(PersistencePackage::from("auto".to_string()), PersistencePackage::Auto);
        assert_eq!(PersistencePackage::Auto.resolve(), "jakarta.persistence");
        assert_eq!(
            PersistencePackage::from("javax.persistence".to_string()).resolve(),
            "javax.persistence"
        );
    }
}
