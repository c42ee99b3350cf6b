//! `springgen config`: inspect and edit the persisted configuration.
//!
//! `show` and `get` report the effective configuration, environment
//! overrides included. `set`, `init`, `path` and `edit` touch the file only
//! and never load the effective configuration, so they still work when the
//! file or an environment override is broken.

use springgen_adapters::{JsonConfigStore, config_store::to_pretty_json};
use springgen_core::{
    application::ConfigStore,
    domain::{CONFIG_KEYS, GeneratorConfig},
};
use tracing::info;

use crate::{
    cli::{ConfigCommands, ConfigFormat},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
    prompt,
};

/// Dispatch to the correct config subcommand.
///
/// `load` is only called by the subcommands that report effective values.
pub fn execute(
    cmd: ConfigCommands,
    store: JsonConfigStore,
    load: impl FnOnce() -> CliResult<AppConfig>,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Show { format } => {
            let config = load()?;
            output.raw(&render(&config.generator, format)?)?;
        }

        ConfigCommands::Get { key } => {
            let value = load()?.generator.get_key(&key)?;
            output.raw(&format!("{value}\n"))?;
        }

        ConfigCommands::Set { key, value } => {
            let updated = set_value(&store, &key, &value)?;
            output.success(&format!("{key} = {}", updated.get_key(&key)?))?;
        }

        ConfigCommands::Path => {
            output.raw(&format!("{}\n", store.path().display()))?;
        }

        ConfigCommands::Init { force } => {
            if force {
                store.save(&GeneratorConfig::default())?;
                info!(path = %store.path().display(), "Configuration reset to defaults");
                output.success(&format!(
                    "Wrote default configuration to {}",
                    store.path().display()
                ))?;
            } else if store.ensure_exists()? {
                output.success(&format!("Created {}", store.path().display()))?;
            } else {
                output.warning(&format!(
                    "{} already exists (use --force to overwrite)",
                    store.path().display()
                ))?;
            }
        }

        ConfigCommands::Edit => {
            prompt::ensure_interactive()?;
            store.ensure_exists()?;
            let mut file_config = store.load()?;
            for key in CONFIG_KEYS {
                let current = file_config.get_key(key)?;
                let answer = prompt::input(key, Some(current.as_str()))?;
                file_config.set_key(key, &answer)?;
            }
            file_config.validate()?;
            store.save(&file_config)?;
            output.success("Configuration saved")?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Serialise `config` for display. Always ends with a newline.
fn render(config: &GeneratorConfig, format: ConfigFormat) -> CliResult<String> {
    match format {
        ConfigFormat::Json => to_pretty_json(config).with_cli_context(|| "failed to render JSON"),
        ConfigFormat::Toml => {
            toml::to_string_pretty(config).with_cli_context(|| "failed to render TOML")
        }
    }
}

/// Update one key in the stored file, rejecting values that would leave the
/// configuration invalid.
fn set_value(store: &JsonConfigStore, key: &str, value: &str) -> CliResult<GeneratorConfig> {
    store.ensure_exists()?;
    let mut file_config = store.load()?;
    file_config.set_key(key, value)?;
    file_config.validate()?;
    store.save(&file_config)?;
    info!(key, path = %store.path().display(), "Configuration updated");
    Ok(file_config)
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    fn temp_store() -> (tempfile::TempDir, JsonConfigStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonConfigStore::new(dir.path().join("config.json"));
        store.ensure_exists().unwrap();
        (dir, store)
    }

    #[test]
    fn set_value_persists() {
        let (_dir, store) = temp_store();
        set_value(&store, "features.pagination_and_sorting", "yes").unwrap();
        assert!(store.load().unwrap().features.pagination_and_sorting);
    }

    #[test]
    fn set_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonConfigStore::new(dir.path().join("config.json"));
        set_value(&store, "base_package", "com.acme.shop").unwrap();
        assert_eq!(store.load().unwrap().base_package, "com.acme.shop");
    }

    #[test]
    fn set_unknown_key_is_not_found() {
        let (_dir, store) = temp_store();
        let err = set_value(&store, "does.not.exist", "1").unwrap_err();
        assert!(matches!(err, CliError::Core(_)));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn set_rejects_empty_base_package() {
        let (_dir, store) = temp_store();
        assert!(set_value(&store, "base_package", "  ").is_err());
        assert_eq!(store.load().unwrap().base_package, "com.example.demo");
    }

    #[test]
    fn render_json_uses_snake_case_keys() {
        let json = render(&GeneratorConfig::default(), ConfigFormat::Json).unwrap();
        assert!(json.contains("\"pagination_and_sorting\": false"));
        assert!(json.ends_with('\n'));
    }

    #[test]
    fn render_toml_has_sections() {
        let toml = render(&GeneratorConfig::default(), ConfigFormat::Toml).unwrap();
        assert!(toml.contains("[folders]"));
        assert!(toml.contains("base_package = \"com.example.demo\""));
    }
}
