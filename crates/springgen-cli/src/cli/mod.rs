//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "springgen",
    bin_name = "springgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Spring Boot CRUD boilerplate generator",
    long_about = "springgen generates entity, repository, service, service \
                  implementation and controller classes for Spring Boot \
                  projects.",
    after_help = "EXAMPLES:\n\
        \x20 springgen generate Order Customer --all\n\
        \x20 springgen generate Order --single-folder orders --yes\n\
        \x20 springgen preview Order --layer controller\n\
        \x20 springgen config set features.pagination_and_sorting true",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate CRUD layers for one or more entities.
    #[command(
        visible_aliases = ["gen", "g"],
        about = "Generate CRUD layers for entities",
        after_help = "EXAMPLES:\n\
            \x20 springgen generate Order                 # prompt for each layer\n\
            \x20 springgen generate Order Customer --all\n\
            \x20 springgen generate Order --repository --service\n\
            \x20 springgen generate Order --dry-run --yes"
    )]
    Generate(GenerateArgs),

    /// Print one generated file without writing anything.
    #[command(
        about = "Preview a single generated layer",
        after_help = "EXAMPLES:\n\
            \x20 springgen preview Order --layer service\n\
            \x20 springgen preview Order --layer service_impl --single-folder orders"
    )]
    Preview(PreviewArgs),

    /// Manage the springgen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 springgen config show\n\
            \x20 springgen config get base_package\n\
            \x20 springgen config set base_package com.acme.shop\n\
            \x20 springgen config init --force"
    )]
    Config(ConfigCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 springgen completions bash > ~/.local/share/bash-completion/completions/springgen\n\
            \x20 springgen completions zsh  > ~/.zfunc/_springgen\n\
            \x20 springgen completions fish > ~/.config/fish/completions/springgen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `springgen generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Entity names. Prompted for when omitted and a terminal is attached.
    #[arg(value_name = "ENTITIES", help = "Entity names, e.g. Order Customer")]
    pub entities: Vec<String>,

    /// Put every layer in `<base_package>.<NAME>` instead of per-layer folders.
    #[arg(long = "single-folder", value_name = "NAME")]
    pub single_folder: Option<String>,

    #[arg(long, help = "Generate the repository layer")]
    pub repository: bool,

    #[arg(long, help = "Generate the service interface and implementation")]
    pub service: bool,

    #[arg(long, help = "Generate the controller layer")]
    pub controller: bool,

    #[arg(
        long,
        conflicts_with_all = ["repository", "service", "controller"],
        help = "Generate every layer"
    )]
    pub all: bool,

    /// Accept the default answer for every prompt.
    #[arg(short = 'y', long = "yes", help = "Skip prompts and accept defaults")]
    pub yes: bool,

    #[arg(long = "dry-run", help = "Show what would be generated without writing")]
    pub dry_run: bool,

    #[arg(short = 'f', long = "force", help = "Overwrite existing files")]
    pub force: bool,

    /// Java source root. Defaults to `<project-dir>/src/main/java`.
    #[arg(long = "source-root", value_name = "DIR")]
    pub source_root: Option<PathBuf>,

    /// Project directory holding `pom.xml`.
    #[arg(long = "project-dir", value_name = "DIR", default_value = ".")]
    pub project_dir: PathBuf,
}

impl GenerateArgs {
    /// `true` if any individual layer flag was passed.
    pub fn has_layer_flags(&self) -> bool {
        self.repository || self.service || self.controller
    }
}

// ── preview ───────────────────────────────────────────────────────────────────

/// Arguments for `springgen preview`.
#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Entity name.
    #[arg(value_name = "ENTITY")]
    pub entity: String,

    /// Layer key: entity, repository, service, service_impl or controller.
    #[arg(short = 'l', long = "layer", value_name = "KEY", default_value = "entity")]
    pub layer: String,

    #[arg(long = "single-folder", value_name = "NAME")]
    pub single_folder: Option<String>,

    #[arg(long = "project-dir", value_name = "DIR", default_value = ".")]
    pub project_dir: PathBuf,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `springgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `springgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration.
    #[command(visible_alias = "list")]
    Show {
        #[arg(long, value_enum, default_value = "json")]
        format: ConfigFormat,
    },
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `folders.entity`.
        key: String,
    },
    /// Set a configuration key and save the file.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print the path to the active configuration file.
    Path,
    /// Write the default configuration file.
    Init {
        #[arg(long, help = "Replace an existing file")]
        force: bool,
    },
    /// Edit every value interactively.
    Edit,
}

/// Serialisation used by `config show`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    #[default]
    Json,
    Toml,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_generate_command() {
        let cli = Cli::parse_from(["springgen", "generate", "Order", "Customer", "--all"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(args.entities, ["Order", "Customer"]);
        assert!(args.all);
        assert_eq!(args.project_dir, PathBuf::from("."));
    }

    #[test]
    fn generate_aliases() {
        for alias in ["gen", "g"] {
            let cli = Cli::parse_from(["springgen", alias, "Order"]);
            assert!(matches!(cli.command, Commands::Generate(_)));
        }
    }

    #[test]
    fn all_conflicts_with_layer_flags() {
        let result =
            Cli::try_parse_from(["springgen", "generate", "Order", "--all", "--service"]);
        assert!(result.is_err());
    }

    #[test]
    fn layer_flags_are_detected() {
        let cli = Cli::parse_from(["springgen", "generate", "Order", "--controller"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert!(args.has_layer_flags());
    }

    #[test]
    fn preview_defaults_to_entity_layer() {
        let cli = Cli::parse_from(["springgen", "preview", "Order"]);
        let Commands::Preview(args) = cli.command else {
            panic!("expected Preview command");
        };
        assert_eq!(args.layer, "entity");
    }

    #[test]
    fn config_show_accepts_toml() {
        let cli = Cli::parse_from(["springgen", "config", "show", "--format", "toml"]);
        assert!(matches!(
            cli.command,
            Commands::Config(ConfigCommands::Show {
                format: ConfigFormat::Toml
            })
        ));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["springgen", "--quiet", "--verbose", "config", "path"]);
        assert!(result.is_err());
    }
}
