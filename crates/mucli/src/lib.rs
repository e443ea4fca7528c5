//! # mucli
//!
//! Command-line client for the MangaUpdates API.
//!
//! Subprograms and commands are not hand-written: they are the tags and operation ids of
//! an API description, turned into a help catalog by `mucli-core` at startup. This crate
//! supplies everything around that catalog: configuration, argument routing, flag
//! parsing, the HTTP transport and the `generate` tool.

pub mod cli;
pub mod client;
pub mod config;
pub mod dispatch;
pub mod flags;
pub mod generate;
pub mod help_flags;
pub mod listing;
pub mod logging;
pub mod output;
pub mod route;

use std::io::Write;

use anyhow::Context as _;
use mucli_core::{Catalog, CatalogOptions, OpenApi, generate_catalog, load_document, parse_document};

use crate::{
    cli::{Cli, Command},
    config::{Config, Overrides},
};

/// The MangaUpdates API description compiled into the binary.
pub const EMBEDDED_SPEC: &str = include_str!("../assets/mangaupdates.yaml");

/// Runs a parsed command line, writing command output to `out`.
pub fn run(cli: Cli, out: &mut dyn Write) -> anyhow::Result<()> {
    match cli.command {
        Command::Generate(args) => generate::run(&args, out),
        Command::Api(args) => {
            let document = match &cli.global.spec {
                Some(path) => load_document(path)
                    .with_context(|| format!("failed to load {}", path.display()))?,
                None => embedded_document()?,
            };
            let catalog = generate_catalog(&document, &CatalogOptions::default());
            let config = Config::load(
                cli.global.config.as_deref(),
                Overrides {
                    base_url: cli.global.base_url,
                    token: cli.global.token,
                    timeout_secs: cli.global.timeout_secs,
                },
            )?;
            dispatch::dispatch(&args, &catalog, &config, out)
        }
    }
}

/// Parses [`EMBEDDED_SPEC`].
pub fn embedded_document() -> anyhow::Result<OpenApi> {
    parse_document(EMBEDDED_SPEC, mucli_core::DocumentFormat::Yaml)
        .context("embedded API description is invalid")
}

/// The help catalog of the embedded API description.
pub fn embedded_catalog() -> anyhow::Result<Catalog> {
    Ok(generate_catalog(&embedded_document()?, &CatalogOptions::default()))
}
