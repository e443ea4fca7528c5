//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use mucli_core::help::DEFAULT_PROGRAM_NAME;

/// MangaUpdates API command-line client.
#[derive(Debug, Parser)]
#[command(
    name = "mucli",
    version,
    arg_required_else_help = true,
    after_help = "Use 'mucli <subprogram> -h' or '-hh' for the commands of a subprogram.\n\
                  Use 'mucli <subprogram> <command> -h' for JSON help on a specific command.\n\
                  Use 'mucli <subprogram> <command> -hh' for human-readable help on a specific command."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options that go before the subprogram.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// API description to build commands from instead of the embedded one.
    #[arg(long, value_name = "FILE")]
    pub spec: Option<PathBuf>,

    /// Configuration file (defaults to the platform config directory).
    #[arg(long, value_name = "FILE", env = "MUCLI_CONFIG")]
    pub config: Option<PathBuf>,

    /// Base URL of the API.
    #[arg(long, value_name = "URL", env = "MUCLI_BASE_URL")]
    pub base_url: Option<String>,

    /// Bearer token sent to commands that require authentication.
    #[arg(long, value_name = "TOKEN", env = "MUCLI_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS", env = "MUCLI_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate help catalog files from an API description.
    Generate(GenerateArgs),

    /// `<subprogram> [<command>] [--flag value ...]`: call an API operation.
    #[command(external_subcommand)]
    Api(Vec<String>),
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Path to the API description (YAML or JSON).
    #[arg(long, value_name = "FILE")]
    pub spec: PathBuf,

    /// Root directory; one directory per subprogram is created below it.
    #[arg(long, value_name = "DIR")]
    pub out_dir: PathBuf,

    /// Representation of the generated files.
    #[arg(long, value_enum, default_value_t = EmitFormat::Json)]
    pub format: EmitFormat,

    /// Remove previously generated files before generating new ones.
    #[arg(long)]
    pub clean: bool,

    /// Program name used in usage lines.
    #[arg(long, default_value = DEFAULT_PROGRAM_NAME)]
    pub program_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EmitFormat {
    Json,
    Rust,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_with_unknown_word_routes_to_api() {
        //* When
        let cli = Cli::try_parse_from(["mucli", "-v", "series", "retrieveSeries", "--id", "1"])
            .expect("arguments should parse");

        //* Then
        assert_eq!(cli.global.verbose, 1);
        let Command::Api(args) = cli.command else {
            panic!("expected an API invocation");
        };
        assert_eq!(args, ["series", "retrieveSeries", "--id", "1"]);
    }

    #[test]
    fn parse_generate_uses_defaults() {
        //* When
        let cli = Cli::try_parse_from(["mucli", "generate", "--spec", "api.yaml", "--out-dir", "out"])
            .expect("arguments should parse");

        //* Then
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.format, EmitFormat::Json);
        assert_eq!(args.program_name, "mucli");
        assert!(!args.clean);
    }
}
