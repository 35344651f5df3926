//! CLI bootstrap - the composition root.
//!
//! This is the only place the debugger paths are resolved. Handlers borrow
//! the resulting [`CliContext`] instead of resolving on their own.

use kic_debug_core::{HostFamily, ResolvedPaths};
use tracing::debug;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliConfig {
    /// Host family to resolve for.
    pub host: HostFamily,
}

impl CliConfig {
    /// Config for the host this binary runs on.
    pub const fn with_defaults() -> Self {
        Self {
            host: HostFamily::current(),
        }
    }

    /// Config for an explicit host family.
    pub const fn with_host(host: HostFamily) -> Self {
        Self { host }
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Fully composed context for CLI commands.
#[derive(Debug, Clone)]
pub struct CliContext {
    /// Debugger paths, resolved once.
    pub paths: ResolvedPaths,
}

impl CliContext {
    pub const fn paths(&self) -> &ResolvedPaths {
        &self.paths
    }
}

/// Build the CLI context from config.
pub fn bootstrap(config: CliConfig) -> CliContext {
    debug!(host = %config.host, "Bootstrapping CLI context");

    CliContext {
        paths: ResolvedPaths::for_host(config.host),
    }
}
