//! Subcommand definitions.

use clap::Subcommand;
use kic_debug_core::HostFamily;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show every resolved path
    Paths {
        /// Classify this OS instead of the current host (e.g. windows, linux, macos)
        #[arg(long)]
        host: Option<HostFamily>,

        /// Print as JSON instead of `key = value` lines
        #[arg(long)]
        json: bool,
    },

    /// Print only the kic-debug executable path
    Executable {
        /// Classify this OS instead of the current host (e.g. windows, linux, macos)
        #[arg(long)]
        host: Option<HostFamily>,
    },
}

impl Commands {
    /// Host override requested on the command line, if any.
    pub const fn host(&self) -> Option<HostFamily> {
        match self {
            Self::Paths { host, .. } | Self::Executable { host } => *host,
        }
    }
}
