//! Routing of `<subprogram> [<command>] [args...]` to help output or an API call.

use mucli_core::{Catalog, CatalogEntry};

use crate::help_flags::{HelpMode, split_help_flags};

/// What an API invocation resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum Route<'c> {
    /// List the commands of a subprogram.
    SubprogramHelp { subprogram: &'c str, mode: HelpMode },
    /// Show the help of one command.
    CommandHelp { entry: &'c CatalogEntry, mode: HelpMode },
    /// Call the operation behind a command with the remaining arguments.
    Call { entry: &'c CatalogEntry, args: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("missing subprogram")]
    MissingSubprogram,

    #[error("unknown subprogram '{0}'")]
    UnknownSubprogram(String),

    #[error("unknown command '{command}' for subprogram '{subprogram}'")]
    UnknownCommand { subprogram: String, command: String },
}

/// Resolves an invocation against the catalog.
///
/// - `<sub>` alone shows the JSON command list of the subprogram.
/// - `<sub> -h|-hh|help` shows the command list as JSON (`-h`) or text (`-hh`, `help`).
/// - `<sub> -h|-hh|help <cmd> [args]` shows the help of `<cmd>` in the same mode.
/// - `<sub> <cmd> [args]` shows help when `args` hold a help flag, and calls `<cmd>`
///   otherwise. `-hh` wins over `-h` wherever either appears.
pub fn route<'c>(args: &[String], catalog: &'c Catalog) -> Result<Route<'c>, RouteError> {
    let (subprogram, rest) = args.split_first().ok_or(RouteError::MissingSubprogram)?;
    let subprogram = catalog
        .subprograms()
        .find(|name| *name == subprogram.as_str())
        .ok_or_else(|| RouteError::UnknownSubprogram(subprogram.clone()))?;

    let Some((first, tail)) = rest.split_first() else {
        return Ok(Route::SubprogramHelp {
            subprogram,
            mode: HelpMode::Json,
        });
    };

    let (command, command_args, leading_mode) = match subprogram_help_flag(first) {
        Some(mode) => match tail.split_first() {
            Some((command, command_args)) => (command, command_args, Some(mode)),
            None => return Ok(Route::SubprogramHelp { subprogram, mode }),
        },
        None => (first, tail, None),
    };

    let entry = catalog
        .find(subprogram, command)
        .ok_or_else(|| RouteError::UnknownCommand {
            subprogram: subprogram.to_string(),
            command: command.clone(),
        })?;

    let (trailing_mode, remaining) = split_help_flags(command_args);
    match strongest(leading_mode, trailing_mode) {
        Some(mode) => Ok(Route::CommandHelp { entry, mode }),
        None => Ok(Route::Call {
            entry,
            args: remaining,
        }),
    }
}

fn subprogram_help_flag(arg: &str) -> Option<HelpMode> {
    match arg {
        "help" => Some(HelpMode::Text),
        _ => HelpMode::from_flag(arg),
    }
}

fn strongest(a: Option<HelpMode>, b: Option<HelpMode>) -> Option<HelpMode> {
    match (a, b) {
        (Some(HelpMode::Text), _) | (_, Some(HelpMode::Text)) => Some(HelpMode::Text),
        (None, None) => None,
        _ => Some(HelpMode::Json),
    }
}
