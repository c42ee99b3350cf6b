//! Composable source fragments shared by every layer generator.

use crate::domain::{
    entities::{GeneratorConfig, NamespaceMap},
    references::ImportSet,
    value_objects::{Layer, RetrievalMode},
};

/// Identity type of every generated entity.
pub const ID_TYPE: &str = "Long";

/// Indentation unit of the generated source.
pub const INDENT: &str = "    ";

/// Everything a generator needs for one (entity, layer) pair.
#[derive(Debug, Clone, Copy)]
pub struct LayerContext<'a> {
    pub layer: Layer,
    pub entity: &'a str,
    pub namespaces: &'a NamespaceMap,
    pub config: &'a GeneratorConfig,
}

impl<'a> LayerContext<'a> {
    pub fn new(
        layer: Layer,
        entity: &'a str,
        namespaces: &'a NamespaceMap,
        config: &'a GeneratorConfig,
    ) -> Self {
        Self {
            layer,
            entity,
            namespaces,
            config,
        }
    }

    /// Namespace the file is declared in.
    pub fn namespace(&self) -> &'a str {
        self.namespaces.get(self.layer)
    }

    pub fn type_name(&self) -> String {
        self.layer.type_name(self.entity)
    }

    /// Fresh import set seeded with `framework` paths.
    pub fn imports(&self, framework: &[&str]) -> ImportSet<'a> {
        ImportSet::new(self.namespace()).with_framework(framework)
    }

    /// Reference the type `other` generates, if it lives elsewhere.
    pub fn reference(&self, imports: &mut ImportSet<'a>, other: Layer) {
        imports.reference(self.namespaces.get(other), &other.type_name(self.entity));
    }

    pub fn retrieval_mode(&self) -> RetrievalMode {
        self.config.retrieval_mode()
    }
}

/// Header (package + imports) followed by `body`.
pub fn source_file(namespace: &str, imports: &ImportSet<'_>, body: &str) -> String {
    let mut out = format!("package {namespace};\n\n");
    if !imports.is_empty() {
        out.push_str(&imports.render());
        out.push('\n');
    }
    out.push_str(body.trim_end());
    out.push('\n');
    out
}

/// Java block member: every line indented one level, blank lines kept bare.
pub fn indent(block: &str) -> String {
    block
        .lines()
        .map(|line| {
            if line.is_empty() {
                "\n".to_string()
            } else {
                format!("{INDENT}{line}\n")
            }
        })
        .collect()
}

/// `Order` → `order`, `HTTPLog` → `hTTPLog`.
pub fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// English plural suffix used for controller path roots.
pub fn pluralize(word: &str) -> String {
    let lower = word.to_ascii_lowercase();
    let ends_with_consonant_y = lower.ends_with('y')
        && !lower[..lower.len() - 1].ends_with(['a', 'e', 'i', 'o', 'u'])
        && lower.len() > 1;

    if ends_with_consonant_y {
        format!("{}ies", &word[..word.len() - 1])
    } else if ["s", "x", "z", "ch", "sh"].iter().any(|s| lower.ends_with(s)) {
        format!("{word}es")
    } else {
        format!("{word}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_first_only_touches_first_char() {
        assert_eq!(lower_first("Order"), "order");
        assert_eq!(lower_first("OrderLine"), "orderLine");
        assert_eq!(lower_first(""), "");
    }

    #[test]
    fn pluralize_rules() {
        assert_eq!(pluralize("order"), "orders");
        assert_eq!(pluralize("category"), "categories");
        assert_eq!(pluralize("day"), "days");
        assert_eq!(pluralize("address"), "addresses");
        assert_eq!(pluralize("box"), "boxes");
        assert_eq!(pluralize("batch"), "batches");
        assert_eq!(pluralize("y"), "ys");
    }

    #[test]
    fn indent_keeps_blank_lines_bare() {
        assert_eq!(indent("a\n\nb"), "    a\n\n    b\n");
    }

    #[test]
    fn source_file_without_imports() {
        let imports = ImportSet::new("a.b");
        assert_eq!(
            source_file("a.b", &imports, "class X {}\n\n"),
            "package a.b;\n\nclass X {}\n"
        );
    }
}
