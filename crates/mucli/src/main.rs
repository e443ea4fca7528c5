use std::process::ExitCode;

use clap::Parser as _;
use mucli::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = mucli::logging::init(cli.global.verbose) {
        eprintln!("Warning: {err:#}");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match mucli::run(cli, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
