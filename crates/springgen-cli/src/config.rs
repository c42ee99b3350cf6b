//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! core only ever sees the resolved [`GeneratorConfig`].
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables `SPRINGGEN_*`, `__` between nested keys
//! 3. Config file (`~/.springgen/config.json` or `--config`)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context as _;
use config::{Config, Environment};
use springgen_adapters::JsonConfigStore;
use springgen_core::{application::ConfigStore, domain::GeneratorConfig};
use tracing::{debug, info};

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "SPRINGGEN";

/// Separator between nested keys in environment variable names.
pub const ENV_SEPARATOR: &str = "__";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Effective generator configuration.
    pub generator: GeneratorConfig,
}

impl AppConfig {
    /// Load configuration, creating the file with defaults on first use.
    ///
    /// `config_file` is the path the user passed via `--config`, or `None`
    /// for the default location.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let store = Self::store(config_file);
        if store.ensure_exists()? {
            info!(path = %store.path().display(), "Created default configuration");
        }

        // The store already merged built-in defaults under the file record.
        let file_config = store.load()?;
        let generator = layer_environment(&file_config, Environment::with_prefix(ENV_PREFIX))
            .with_context(|| format!("invalid configuration in {}", store.path().display()))?;

        debug!(path = %store.path().display(), "Configuration loaded");
        Ok(Self { generator })
    }

    /// Store backing `config_file`, or the default location.
    pub fn store(config_file: Option<&PathBuf>) -> JsonConfigStore {
        match config_file {
            Some(path) => JsonConfigStore::new(path),
            None => JsonConfigStore::at_default_location(),
        }
    }
}

/// Apply environment overrides on top of `base`.
fn layer_environment(
    base: &GeneratorConfig,
    environment: Environment,
) -> anyhow::Result<GeneratorConfig> {
    let layered = Config::builder()
        .add_source(Config::try_from(base)?)
        .add_source(
            environment
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        )
        .build()
        .context("failed to merge configuration sources")?;

    let generator: GeneratorConfig = layered
        .try_deserialize()
        .context("failed to deserialise configuration")?;
    generator.validate()?;
    Ok(generator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(source))
    }

    #[test]
    fn file_values_survive_without_environment() {
        let mut base = GeneratorConfig::default();
        base.base_package = "com.acme.shop".into();

        let cfg = layer_environment(&base, env(&[])).unwrap();
        assert_eq!(cfg, base);
    }

    #[test]
    fn environment_overrides_top_level_key() {
        let cfg = layer_environment(
            &GeneratorConfig::default(),
            env(&[("SPRINGGEN_BASE_PACKAGE", "org.acme")]),
        )
        .unwrap();
        assert_eq!(cfg.base_package, "org.acme");
    }

    #[test]
    fn environment_overrides_nested_keys() {
        let cfg = layer_environment(
            &GeneratorConfig::default(),
            env(&[
                ("SPRINGGEN_FEATURES__PAGINATION_AND_SORTING", "true"),
                ("SPRINGGEN_API__DEFAULT_PAGE_SIZE", "50"),
                ("SPRINGGEN_FOLDERS__ENTITY", "domain"),
            ]),
        )
        .unwrap();
        assert!(cfg.features.pagination_and_sorting);
        assert_eq!(cfg.api.default_page_size, 50);
        assert_eq!(cfg.folders.entity, "domain");
    }

    #[test]
    fn invalid_override_is_rejected() {
        let result = layer_environment(
            &GeneratorConfig::default(),
            env(&[("SPRINGGEN_API__DEFAULT_PAGE_SIZE", "0")]),
        );
        assert!(result.is_err());
    }

    #[test]
    fn corrupt_file_fails_load_but_store_can_rewrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(AppConfig::load(Some(&path)).is_err());
        // The store still reaches the file, so it can be rewritten.
        let store = AppConfig::store(Some(&path));
        store.save(&GeneratorConfig::default()).unwrap();
        assert!(AppConfig::load(Some(&path)).is_ok());
    }

    #[test]
    fn load_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert!(path.exists());
        assert_eq!(cfg.generator.folders.controller, "controller");
    }
}
