//! Service operation table.
//!
//! The service interface, its implementation and the controller are all
//! rendered from [`ServiceOperation::for_mode`], so the three layers always
//! agree on the operation set for a given retrieval mode.

use crate::domain::{
    generators::fragments::ID_TYPE,
    value_objects::{PageDefaults, RetrievalMode},
};

/// One operation on the generated service contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceOperation<'a> {
    GetAll,
    GetPage(&'a PageDefaults),
    GetById,
    Save,
    Update,
    Delete,
}

/// HTTP verb of a controller endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpVerb {
    pub const fn annotation(&self) -> &'static str {
        match self {
            Self::Get => "GetMapping",
            Self::Post => "PostMapping",
            Self::Put => "PutMapping",
            Self::Delete => "DeleteMapping",
        }
    }
}

impl<'a> ServiceOperation<'a> {
    /// Operations in declaration order. Exactly one retrieval operation is
    /// present: `GetAll` or `GetPage`, never both.
    pub fn for_mode(mode: &'a RetrievalMode) -> [ServiceOperation<'a>; 5] {
        let retrieval = match mode {
            RetrievalMode::Collection => Self::GetAll,
            RetrievalMode::Paged(defaults) => Self::GetPage(defaults),
        };
        [
            retrieval,
            Self::GetById,
            Self::Save,
            Self::Update,
            Self::Delete,
        ]
    }

    pub const fn method_name(&self) -> &'static str {
        match self {
            Self::GetAll => "getAll",
            Self::GetPage(_) => "getPage",
            Self::GetById => "getById",
            Self::Save => "save",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    pub fn return_type(&self, entity: &str) -> String {
        match self {
            Self::GetAll => format!("List<{entity}>"),
            Self::GetPage(_) => format!("Page<{entity}>"),
            Self::GetById | Self::Save | Self::Update => entity.to_string(),
            Self::Delete => "void".to_string(),
        }
    }

    /// `(type, name)` pairs of the service method.
    pub fn params(&self, entity: &str) -> Vec<(String, &'static str)> {
        match self {
            Self::GetAll => vec![],
            Self::GetPage(_) => vec![("Pageable".to_string(), "pageable")],
            Self::GetById | Self::Delete => vec![(ID_TYPE.to_string(), "id")],
            Self::Save | Self::Update => vec![(entity.to_string(), "obj")],
        }
    }

    /// `List<Order> getAll()`, `Order save(Order obj)`, ...
    pub fn signature(&self, entity: &str) -> String {
        let params = self
            .params(entity)
            .iter()
            .map(|(ty, name)| format!("{ty} {name}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "{} {}({params})",
            self.return_type(entity),
            self.method_name()
        )
    }

    /// Placeholder body of the generated implementation.
    pub const fn stub_body(&self) -> &'static str {
        match self {
            Self::Delete => "return;",
            _ => "return null;",
        }
    }

    // ── Controller mapping ──────────────────────────────────────────────

    pub const fn verb(&self) -> HttpVerb {
        match self {
            Self::GetAll | Self::GetPage(_) | Self::GetById => HttpVerb::Get,
            Self::Save => HttpVerb::Post,
            Self::Update => HttpVerb::Put,
            Self::Delete => HttpVerb::Delete,
        }
    }

    /// Sub-path below the controller root; `None` maps the root itself.
    pub const fn path(&self) -> Option<&'static str> {
        match self {
            Self::GetById | Self::Update | Self::Delete => Some("/{id}"),
            Self::GetAll | Self::GetPage(_) | Self::Save => None,
        }
    }

    pub const fn handler_name(&self) -> &'static str {
        match self {
            Self::Save => "create",
            other => other.method_name(),
        }
    }

    /// Handler parameters with their request-binding annotations.
    pub fn handler_params(&self, entity: &str) -> Vec<String> {
        match self {
            Self::GetAll => vec![],
            Self::GetPage(defaults) => vec![format!(
                "{} Pageable pageable",
                pageable_default(defaults)
            )],
            Self::GetById | Self::Delete => vec![format!("@PathVariable {ID_TYPE} id")],
            Self::Save => vec![format!("@RequestBody {entity} body")],
            Self::Update => vec![
                format!("@PathVariable {ID_TYPE} id"),
                format!("@RequestBody {entity} body"),
            ],
        }
    }

    /// Arguments the handler forwards to the service.
    pub const fn delegate_args(&self) -> &'static str {
        match self {
            Self::GetAll => "",
            Self::GetPage(_) => "pageable",
            Self::GetById | Self::Delete => "id",
            Self::Save | Self::Update => "body",
        }
    }
}

/// `@PageableDefault(size = 10, sort = "name", direction = Sort.Direction.DESC)`
fn pageable_default(defaults: &PageDefaults) -> String {
    let mut args = vec![format!("size = {}", defaults.size)];
    if let Some(field) = &defaults.sort.field {
        args.push(format!("sort = \"{field}\""));
    }
    args.push(format!("direction = Sort.Direction.{}", defaults.sort.direction));
    format!("@PageableDefault({})", args.join(", "))
}
