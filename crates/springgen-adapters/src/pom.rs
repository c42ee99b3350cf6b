//! Persistence-dialect detection from a Maven `pom.xml`.
//!
//! Spring Boot 3 moved from `javax.persistence` to `jakarta.persistence`, so
//! the Boot version decides which annotations the data-model layer imports.
//! The pom is walked element by element with `quick-xml`; comments are
//! ignored and `${...}` versions are resolved from `<properties>`.

use std::{collections::HashMap, path::Path};

use quick_xml::{Reader, events::Event};
use springgen_core::domain::PersistencePackage;
use tracing::debug;

const BOOT_PARENT: &str = "spring-boot-starter-parent";
const BOOT_BOM: &str = "spring-boot-dependencies";
const BOOT_VERSION_PROPERTY: &str = "spring-boot.version";

/// Persistence package implied by the pom at `pom_path`, if it can tell.
pub fn detect_persistence_package(pom_path: &Path) -> Option<&'static str> {
    let xml = match std::fs::read_to_string(pom_path) {
        Ok(xml) => xml,
        Err(e) => {
            debug!(path = %pom_path.display(), error = %e, "No readable pom.xml");
            return None;
        }
    };

    let detected = persistence_from_pom(&xml);
    debug!(path = %pom_path.display(), ?detected, "Persistence package detection");
    detected
}

/// Same as [`detect_persistence_package`] on already-read pom content.
///
/// Malformed XML gives `None`.
pub fn persistence_from_pom(xml: &str) -> Option<&'static str> {
    let pom = match PomFacts::parse(xml) {
        Ok(pom) => pom,
        Err(e) => {
            debug!(error = %e, "Unparseable pom.xml");
            return None;
        }
    };

    if let Some(major) = pom.spring_boot_major() {
        return Some(if major >= 3 {
            PersistencePackage::JAKARTA
        } else {
            PersistencePackage::JAVAX
        });
    }

    let mentions = |package: &str| pom.dependency_ids.iter().any(|id| id.contains(package));
    if mentions(PersistencePackage::JAKARTA) {
        Some(PersistencePackage::JAKARTA)
    } else if mentions(PersistencePackage::JAVAX) {
        Some(PersistencePackage::JAVAX)
    } else {
        None
    }
}

/// What the detector needs out of a pom.
#[derive(Debug, Default)]
struct PomFacts {
    properties: HashMap<String, String>,
    parent: Coordinates,
    /// Coordinates of every `<dependency>`, managed or direct.
    dependencies: Vec<Coordinates>,
    /// `groupId:artifactId` of every `<dependency>`.
    dependency_ids: Vec<String>,
}

#[derive(Debug, Default, Clone)]
struct Coordinates {
    group_id: Option<String>,
    artifact_id: Option<String>,
    version: Option<String>,
}

impl Coordinates {
    fn is_artifact(&self, artifact: &str) -> bool {
        self.artifact_id.as_deref() == Some(artifact)
    }

    fn set(&mut self, field: &str, text: String) {
        match field {
            "groupId" => self.group_id = Some(text),
            "artifactId" => self.artifact_id = Some(text),
            "version" => self.version = Some(text),
            _ => {}
        }
    }
}

impl PomFacts {
    fn parse(xml: &str) -> quick_xml::Result<Self> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut facts = Self::default();
        // Local names of the open elements, outermost first.
        let mut path: Vec<String> = Vec::new();
        let mut dependency: Option<Coordinates> = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                    if name == "dependency" {
                        dependency = Some(Coordinates::default());
                    }
                    path.push(name);
                }
                Event::End(_) => {
                    if path.pop().as_deref() == Some("dependency") {
                        if let Some(done) = dependency.take() {
                            facts.dependency_ids.push(format!(
                                "{}:{}",
                                done.group_id.as_deref().unwrap_or_default(),
                                done.artifact_id.as_deref().unwrap_or_default()
                            ));
                            facts.dependencies.push(done);
                        }
                    }
                }
                Event::Text(t) => {
                    let text = t.unescape()?.trim().to_string();
                    facts.record(&path, dependency.as_mut(), text);
                }
                Event::Eof => break,
                // Comments, declarations and empty elements carry nothing we read.
                _ => {}
            }
        }
        Ok(facts)
    }

    fn record(&mut self, path: &[String], dependency: Option<&mut Coordinates>, text: String) {
        let names: Vec<&str> = path.iter().map(String::as_str).collect();
        match names.as_slice() {
            ["project", "properties", key] => {
                self.properties.insert((*key).to_string(), text);
            }
            ["project", "parent", field] => self.parent.set(field, text),
            [.., "dependency", field] => {
                if let Some(dependency) = dependency {
                    dependency.set(field, text);
                }
            }
            _ => {}
        }
    }

    /// `${name}` resolved from `<properties>`; literal values pass through.
    fn resolve<'a>(&'a self, value: &'a str) -> Option<&'a str> {
        match value.strip_prefix("${").and_then(|v| v.strip_suffix('}')) {
            Some(name) => self.properties.get(name).map(String::as_str),
            None => Some(value),
        }
    }

    /// Major version of Spring Boot declared by the parent, the BOM import,
    /// or the `spring-boot.version` property.
    fn spring_boot_major(&self) -> Option<u32> {
        let declared = std::iter::once(&self.parent)
            .chain(&self.dependencies)
            .filter(|c| c.is_artifact(BOOT_PARENT) || c.is_artifact(BOOT_BOM))
            .find_map(|c| c.version.as_deref())
            .or_else(|| {
                self.properties
                    .get(BOOT_VERSION_PROPERTY)
                    .map(String::as_str)
            })?;

        self.resolve(declared)?
            .split('.')
            .next()?
            .trim()
            .parse()
            .ok()
    }
}
