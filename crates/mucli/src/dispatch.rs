//! Executes one API invocation: help output or a request.

use std::io::Write;

use anyhow::{Context as _, bail};
use mucli_core::{Catalog, render_json, render_text};

use crate::{
    client::ApiClient,
    config::Config,
    flags::parse_call_args,
    help_flags::HelpMode,
    listing::{render_subprogram_json, render_subprogram_text, render_top_level, subprogram_help},
    output::write_body,
    route::{Route, RouteError, route},
};

/// Routes `args` (`<subprogram> [<command>] [args...]`) and writes the result to `out`.
///
/// A response with a non-success status is printed and then reported as an error.
pub fn dispatch(
    args: &[String],
    catalog: &Catalog,
    config: &Config,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let route = match route(args, catalog) {
        Ok(route) => route,
        Err(err @ (RouteError::MissingSubprogram | RouteError::UnknownSubprogram(_))) => {
            write!(out, "{}", render_top_level(catalog))?;
            return Err(err.into());
        }
        Err(err @ RouteError::UnknownCommand { .. }) => {
            if let Some(subprogram) = args.first() {
                write!(out, "{}", render_subprogram_text(&subprogram_help(catalog, subprogram)))?;
            }
            return Err(err.into());
        }
    };

    match route {
        Route::SubprogramHelp { subprogram, mode } => {
            let help = subprogram_help(catalog, subprogram);
            match mode {
                HelpMode::Json => writeln!(out, "{}", render_subprogram_json(&help)?)?,
                HelpMode::Text => write!(out, "{}", render_subprogram_text(&help))?,
            }
        }
        Route::CommandHelp { entry, mode } => match mode {
            HelpMode::Json => writeln!(out, "{}", render_json(&entry.help)?)?,
            HelpMode::Text => write!(out, "{}", render_text(&entry.help))?,
        },
        Route::Call { entry, args } => {
            let call = parse_call_args(&entry.operation, &args).with_context(|| {
                format!("invalid arguments for '{}', see -hh for usage", entry.operation_id)
            })?;
            let client = ApiClient::new(config)?;
            let response = client.execute(entry, &call)?;
            write_body(out, &response.body)?;
            if !response.is_success() {
                bail!("request failed with status {}", response.status);
            }
        }
    }
    Ok(())
}
