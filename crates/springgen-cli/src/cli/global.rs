//! Flags shared by every springgen subcommand.

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more to stderr. Warnings are shown by default; `RUST_LOG` wins
    /// over this flag when set.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log more (-v info, -vv debug, -vvv trace)",
        long_help = "Log more to stderr:
    (none)  - Warnings and errors
    -v      - Each file written or skipped
    -vv     - Resolved namespaces and config sources
    -vvv    - Everything"
    )]
    pub verbose: u8,

    /// Status lines are dropped. Generated source, `config` values and JSON
    /// documents are still printed.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only print payloads and errors"
    )]
    pub quiet: bool,

    /// Also set by `NO_COLOR` (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Generator configuration file. Defaults to `~/.springgen/config.json`.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Generator configuration file"
    )]
    pub config: Option<PathBuf>,

    /// `json` turns the `generate` report and `preview` output into JSON
    /// documents and logs into JSON lines.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human on a terminal, plain when stdout is piped.
    #[default]
    Auto,
    /// Coloured status lines.
    Human,
    /// Status lines without colour.
    Plain,
    /// JSON documents on stdout.
    Json,
}
