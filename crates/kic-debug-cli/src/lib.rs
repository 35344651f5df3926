//! Command-line adapter for `kic-debug-core`.
//!
//! Resolves the debugger paths once in [`bootstrap`] and lets handlers print
//! them. Nothing here launches the debugger.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by main.rs for top-level error reporting
use anyhow as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
