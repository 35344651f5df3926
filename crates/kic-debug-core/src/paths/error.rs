//! Path-related error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when handing a resolved path to string-based callers.
///
/// Resolution itself never fails; only conversions out of `Path` do.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// The path cannot be represented as UTF-8.
    #[error("Path {} is not valid UTF-8", .0.display())]
    NonUtf8Path(PathBuf),
}
