//! CLI entry point - the composition root.

use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use kic_debug_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers, logging};

fn run(cli: Cli) -> Result<(), CliError> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = command
        .host()
        .map_or_else(CliConfig::with_defaults, CliConfig::with_host);
    let ctx = bootstrap(config);

    let mut stdout = io::stdout().lock();
    match command {
        Commands::Paths { json, .. } => handlers::paths::execute(&ctx, json, &mut stdout),
        Commands::Executable { .. } => handlers::executable::execute(&ctx, &mut stdout),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            tracing::error!(exit_code = err.exit_code(), "{err}");
            eprintln!("Error: {err}");
            Ok(ExitCode::from(u8::try_from(err.exit_code())?))
        }
    }
}
