//! JSON-backed configuration store (`~/.springgen/config.json`).

use std::path::PathBuf;

use serde::{Serialize, ser::Error as _};
use serde_json::Value;
use springgen_core::{
    application::{ApplicationError, ports::ConfigStore},
    domain::GeneratorConfig,
    error::{SpringgenError, SpringgenResult},
};
use tracing::{debug, info};

const CONFIG_DIR: &str = ".springgen";
const CONFIG_FILE: &str = "config.json";

/// Reads and writes the generator configuration as pretty-printed JSON.
///
/// Records written by older versions may lack whole sections (`features`,
/// `api`); [`ConfigStore::load`] fills anything missing from
/// [`GeneratorConfig::default`] before handing the record to the core.
#[derive(Debug, Clone)]
pub struct JsonConfigStore {
    path: PathBuf,
}

impl JsonConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location in the user's home directory.
    pub fn at_default_location() -> Self {
        Self::new(Self::default_path())
    }

    /// `~/.springgen/config.json`, or `.springgen/config.json` relative to
    /// the working directory when no home directory is known.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_default()
            .join(CONFIG_DIR)
            .join(CONFIG_FILE)
    }

    fn error(&self, reason: impl Into<String>) -> SpringgenError {
        ApplicationError::ConfigStore {
            path: self.path.clone(),
            reason: reason.into(),
        }
        .into()
    }

    fn write(&self, config: &GeneratorConfig) -> SpringgenResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| self.error(format!("cannot create {}: {e}", parent.display())))?;
        }
        let json = to_pretty_json(config).map_err(|e| self.error(e.to_string()))?;
        std::fs::write(&self.path, json).map_err(|e| self.error(e.to_string()))
    }
}

impl ConfigStore for JsonConfigStore {
    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn ensure_exists(&self) -> SpringgenResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        self.write(&GeneratorConfig::default())?;
        info!(path = %self.path.display(), "Default config created");
        Ok(true)
    }

    fn load(&self) -> SpringgenResult<GeneratorConfig> {
        let raw = std::fs::read_to_string(&self.path).map_err(|e| self.error(e.to_string()))?;
        let parsed: Value =
            serde_json::from_str(&raw).map_err(|e| self.error(format!("invalid JSON: {e}")))?;

        let config = with_defaults(parsed).map_err(|e| self.error(e.to_string()))?;
        debug!(path = %self.path.display(), "Config loaded");
        Ok(config)
    }

    fn save(&self, config: &GeneratorConfig) -> SpringgenResult<()> {
        self.write(config)?;
        info!(path = %self.path.display(), "Config saved");
        Ok(())
    }
}

/// Fill fields absent from `record` with the defaults and parse the result.
pub fn with_defaults(record: Value) -> serde_json::Result<GeneratorConfig> {
    let mut merged = serde_json::to_value(GeneratorConfig::default())?;
    merge(&mut merged, record);
    serde_json::from_value(merged)
}

fn merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

/// JSON with 4-space indentation and a trailing newline.
pub fn to_pretty_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    let mut out = String::from_utf8(buf).map_err(serde_json::Error::custom)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use springgen_core::domain::PersistencePackage;

    fn store_in(dir: &tempfile::TempDir) -> JsonConfigStore {
        JsonConfigStore::new(dir.path().join(".springgen").join("config.json"))
    }

    #[test]
    fn ensure_exists_creates_default_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(store.ensure_exists().unwrap());
        assert!(!store.ensure_exists().unwrap());
        assert_eq!(store.load().unwrap(), GeneratorConfig::default());
    }

    #[test]
    fn saved_file_uses_four_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(&GeneratorConfig::default()).unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\n    \"base_package\": \"com.example.demo\""));
        assert!(raw.ends_with("}\n"));
    }

    #[test]
    fn save_then_load_keeps_changes() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut config = GeneratorConfig::default();
        config.base_package = "org.acme.shop".into();
        config.features.pagination_and_sorting = true;
        store.save(&config).unwrap();

        assert_eq!(store.load().unwrap(), config);
    }

    #[test]
    fn legacy_record_without_features_gets_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(
            store.path(),
            r#"{
                "base_package": "com.shop",
                "persistence_package": "javax.persistence",
                "folders": { "entity": "entity", "repository": "repo",
                             "service": "service", "controller": "web" }
            }"#,
        )
        .unwrap();

        let config = store.load().unwrap();
        assert_eq!(config.base_package, "com.shop");
        assert_eq!(config.folders.repository, "repo");
        assert_eq!(
            config.persistence_package,
            PersistencePackage::Explicit("javax.persistence".into())
        );
        assert!(!config.features.pagination_and_sorting);
        assert_eq!(config.api.default_page_size, 20);
    }

    #[test]
    fn wrongly_typed_field_is_a_store_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(
            store.path(),
            r#"{ "features": { "pagination_and_sorting": "sometimes" } }"#,
        )
        .unwrap();

        assert!(matches!(
            store.load(),
            Err(SpringgenError::Application(ApplicationError::ConfigStore { .. }))
        ));
    }

    #[test]
    fn pretty_json_keeps_non_ascii_text() {
        let mut config = GeneratorConfig::default();
        config.base_package = "com.exémple.boutique".into();
        let json = to_pretty_json(&config).unwrap();
        assert!(json.contains("\"base_package\": \"com.exémple.boutique\""));
        assert!(json.ends_with("}\n"));
    }

    #[test]
    fn missing_file_is_a_store_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(store_in(&dir).load().is_err());
    }
}
