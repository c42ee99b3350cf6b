//! Reference Assembler.
//!
//! The one place that decides whether a generated file needs an `import`
//! line for a type produced by another layer. Every generator goes through
//! [`ImportSet::reference`]; none of them compare namespaces on their own.

/// Reference line for `symbol` in `target`, or `None` when the symbol is
/// already visible from `current` (same namespace) or `target` is empty.
pub fn maybe_reference(current: &str, target: &str, symbol: &str) -> Option<String> {
    if target.is_empty() || target == current {
        return None;
    }
    Some(format!("import {target}.{symbol};"))
}

/// Ordered, de-duplicated import block for one generated file.
///
/// Framework imports come first in the order they were added, cross-layer
/// references after them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSet<'a> {
    current: &'a str,
    framework: Vec<String>,
    references: Vec<String>,
}

impl<'a> ImportSet<'a> {
    pub fn new(current_namespace: &'a str) -> Self {
        Self {
            current: current_namespace,
            framework: Vec::new(),
            references: Vec::new(),
        }
    }

    /// Unconditional import of a fully qualified path (or a `.*` wildcard).
    pub fn framework(&mut self, path: &str) -> &mut Self {
        let line = format!("import {path};");
        if !self.framework.contains(&line) {
            self.framework.push(line);
        }
        self
    }

    pub fn with_framework(mut self, paths: &[&str]) -> Self {
        for path in paths {
            self.framework(path);
        }
        self
    }

    /// Import `symbol` from `target_namespace` unless it is local.
    pub fn reference(&mut self, target_namespace: &str, symbol: &str) -> &mut Self {
        if let Some(line) = maybe_reference(self.current, target_namespace, symbol) {
            if !self.references.contains(&line) {
                self.references.push(line);
            }
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.framework.is_empty() && self.references.is_empty()
    }

    /// All lines, each terminated by a newline.
    pub fn render(&self) -> String {
        self.framework
            .iter()
            .chain(&self.references)
            .map(|line| format!("{line}\n"))
            .collect()
    }
}
