//! Interactive prompts.
//!
//! Backed by `dialoguer` when the `interactive` feature is enabled; without
//! it every prompt fails with [`CliError::FeatureNotAvailable`].

use std::io::IsTerminal as _;

use crate::error::{CliError, CliResult};

/// `true` if a user can answer prompts on this terminal.
pub fn can_prompt() -> bool {
    cfg!(feature = "interactive")
        && std::io::stdin().is_terminal()
        && std::io::stderr().is_terminal()
}

/// Fail unless prompting is possible.
pub fn ensure_interactive() -> CliResult<()> {
    if !cfg!(feature = "interactive") {
        return Err(CliError::FeatureNotAvailable {
            feature: "interactive",
        });
    }
    if !can_prompt() {
        return Err(CliError::invalid_input(
            "this command needs an interactive terminal",
        ));
    }
    Ok(())
}

/// Yes/no question.
#[cfg(feature = "interactive")]
pub fn confirm(question: &str, default: bool) -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt(question)
        .default(default)
        .interact()
        .map_err(prompt_error)
}

/// Free-text answer, pre-filled with `default` when given.
#[cfg(feature = "interactive")]
pub fn input(prompt: &str, default: Option<&str>) -> CliResult<String> {
    let mut input = dialoguer::Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true);
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    input.interact_text().map_err(prompt_error)
}

#[cfg(feature = "interactive")]
fn prompt_error(err: dialoguer::Error) -> CliError {
    let source = std::io::Error::from(err);
    if source.kind() == std::io::ErrorKind::Interrupted {
        return CliError::Cancelled;
    }
    CliError::IoError {
        message: "failed to read answer".into(),
        source,
    }
}

#[cfg(not(feature = "interactive"))]
pub fn confirm(_question: &str, _default: bool) -> CliResult<bool> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

#[cfg(not(feature = "interactive"))]
pub fn input(_prompt: &str, _default: Option<&str>) -> CliResult<String> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}
