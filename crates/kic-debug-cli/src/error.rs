//! CLI-specific error types and mappings.

use kic_debug_core::PathError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A resolved path could not be rendered.
    #[error("{0}")]
    Path(#[from] PathError),

    /// Writing or encoding output failed.
    #[error("Output error: {0}")]
    Output(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Codes are taken from sysexits.h.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Path(_) => 65,   // EX_DATAERR
            Self::Output(_) => 74, // EX_IOERR
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Output(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Output(err.to_string())
    }
}
