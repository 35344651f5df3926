//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Show where the bundled kic-debug executable is expected to live.
#[derive(Parser, Debug)]
#[command(name = "kic-debug-paths")]
#[command(about = "Show the resolved path to the bundled kic-debug executable")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use kic_debug_core::HostFamily;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_command_is_allowed() {
        let cli = Cli::try_parse_from(["kic-debug-paths"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_paths_with_host_and_json() {
        let cli =
            Cli::try_parse_from(["kic-debug-paths", "paths", "--host", "windows", "--json"])
                .unwrap();
        match cli.command {
            Some(Commands::Paths { host, json }) => {
                assert_eq!(host, Some(HostFamily::Windows));
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["kic-debug-paths", "executable", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Executable { host: None })));
    }

    #[test]
    fn test_unknown_host_falls_into_other() {
        let cli =
            Cli::try_parse_from(["kic-debug-paths", "executable", "--host", "freebsd"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Executable {
                host: Some(HostFamily::Other)
            })
        ));
    }
}
