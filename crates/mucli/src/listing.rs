//! Command lists of subprograms and the top-level subprogram list.

use mucli_core::{Catalog, help::DEFAULT_PROGRAM_NAME};

/// JSON shape of a subprogram's command list.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SubprogramHelp<'a> {
    pub commands: Vec<CommandSummary<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    pub subprogram: &'a str,
    pub usage: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CommandSummary<'a> {
    pub authentication_required: bool,
    pub description: &'a str,
    pub name: &'a str,
}

/// Collects the command list of `subprogram`; empty when the subprogram is unknown.
pub fn subprogram_help<'a>(catalog: &'a Catalog, subprogram: &'a str) -> SubprogramHelp<'a> {
    let commands = catalog
        .group(subprogram)
        .unwrap_or_default()
        .iter()
        .map(|entry| CommandSummary {
            authentication_required: entry.help.auth_required,
            description: &entry.help.description,
            name: &entry.operation_id,
        })
        .collect();
    SubprogramHelp {
        commands,
        description: catalog.description(subprogram),
        subprogram,
        usage: format!("{DEFAULT_PROGRAM_NAME} {subprogram} <command> [arguments...]"),
    }
}

pub fn render_subprogram_json(help: &SubprogramHelp<'_>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(help)
}

/// Text command list with names padded to a common width.
pub fn render_subprogram_text(help: &SubprogramHelp<'_>) -> String {
    let width = help
        .commands
        .iter()
        .map(|command| command.name.len())
        .max()
        .unwrap_or(0);

    let mut text = format!("Usage: {}\n\n", help.usage);
    if let Some(description) = help.description {
        text.push_str(&format!("{description}\n\n"));
    }
    text.push_str("Available Commands:\n");
    for command in &help.commands {
        let auth = if command.authentication_required {
            " [REQUIRES AUTH]"
        } else {
            ""
        };
        let line = format!("  {:<width$}  {}{auth}", command.name, command.description);
        text.push_str(line.trim_end());
        text.push('\n');
    }
    text.push_str(&format!(
        "\nUse '{DEFAULT_PROGRAM_NAME} {} <command> -h' for JSON help, '-hh' for human-readable help.\n",
        help.subprogram
    ));
    text
}

/// The list of subprograms shown for a missing or unknown subprogram.
pub fn render_top_level(catalog: &Catalog) -> String {
    let mut text = format!(
        "MangaUpdates API CLI Tool\nUsage: {DEFAULT_PROGRAM_NAME} <subprogram> <command> [arguments...]\n\nAvailable Subprograms:\n"
    );
    for subprogram in catalog.subprograms() {
        text.push_str(&format!("  {subprogram}\n"));
    }
    text.push_str(&format!(
        "\nUse '{DEFAULT_PROGRAM_NAME} <subprogram> -h' or '-hh' for the commands of a subprogram.\n\
         Use '{DEFAULT_PROGRAM_NAME} <subprogram> <command> -h' for JSON help on a specific command.\n\
         Use '{DEFAULT_PROGRAM_NAME} <subprogram> <command> -hh' for human-readable help on a specific command.\n"
    ));
    text
}
