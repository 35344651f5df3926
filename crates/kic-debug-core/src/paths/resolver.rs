//! Resolved debugger paths as a single immutable value.
//!
//! The hosting application resolves this once during startup and passes it
//! (or a clone) to the code that launches the debugger. It is also what the
//! `kic-debug-paths` CLI prints.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use super::{
    HostFamily, PathError, bin_dir, debug_executable_file_name, debug_executable_path_for,
    resource_root,
};

/// All debugger paths for one host family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPaths {
    host: HostFamily,
    resource_root: PathBuf,
    bin_dir: PathBuf,
    debug_executable: PathBuf,
}

impl ResolvedPaths {
    /// Resolve paths for the current host.
    pub fn resolve() -> Self {
        Self::for_host(HostFamily::current())
    }

    /// Resolve paths for an explicit host family.
    ///
    /// Only the executable's file name depends on `host`; the directory is the
    /// same for every family.
    pub fn for_host(host: HostFamily) -> Self {
        let resolved = Self {
            host,
            resource_root: resource_root().to_path_buf(),
            bin_dir: bin_dir(),
            debug_executable: debug_executable_path_for(host),
        };

        debug!(
            host = %resolved.host,
            path = %resolved.debug_executable.display(),
            "Resolved kic-debug executable"
        );

        resolved
    }

    pub const fn host(&self) -> HostFamily {
        self.host
    }

    pub fn resource_root(&self) -> &Path {
        &self.resource_root
    }

    pub fn bin_dir(&self) -> &Path {
        &self.bin_dir
    }

    /// Absolute path to the bundled debugger. It may or may not exist.
    pub fn debug_executable(&self) -> &Path {
        &self.debug_executable
    }

    pub fn debug_executable_file_name(&self) -> String {
        debug_executable_file_name(self.host)
    }

    /// The debugger path as a plain string, for callers that cannot take a `Path`.
    pub fn debug_executable_str(&self) -> Result<&str, PathError> {
        self.debug_executable
            .to_str()
            .ok_or_else(|| PathError::NonUtf8Path(self.debug_executable.clone()))
    }
}

impl AsRef<Path> for ResolvedPaths {
    fn as_ref(&self) -> &Path {
        &self.debug_executable
    }
}

impl fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "host = {}", self.host)?;
        writeln!(f, "resource_root = {}", self.resource_root.display())?;
        writeln!(f, "bin_dir = {}", self.bin_dir.display())?;
        write!(f, "debug_executable = {}", self.debug_executable.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_returns_consistent_paths() {
        let first = ResolvedPaths::resolve();
        let second = ResolvedPaths::resolve();

        assert_eq!(first, second, "path resolution should be deterministic");
    }

    #[test]
    fn resolve_uses_current_host() {
        let paths = ResolvedPaths::resolve();
        assert_eq!(paths.host(), HostFamily::current());
        assert_eq!(paths.debug_executable(), crate::paths::debug_executable_path());
    }

    #[test]
    fn directory_does_not_depend_on_host() {
        let windows = ResolvedPaths::for_host(HostFamily::Windows);
        let other = ResolvedPaths::for_host(HostFamily::Other);

        assert_eq!(windows.bin_dir(), other.bin_dir());
        assert_eq!(windows.debug_executable().parent(), Some(windows.bin_dir()));
        assert_eq!(other.debug_executable().parent(), Some(other.bin_dir()));
        assert!(windows.bin_dir().starts_with(windows.resource_root()));
    }

    #[test]
    fn file_name_follows_host() {
        assert_eq!(
            ResolvedPaths::for_host(HostFamily::Windows).debug_executable_file_name(),
            "kic-debug.exe"
        );
        assert_eq!(
            ResolvedPaths::for_host(HostFamily::Other).debug_executable_file_name(),
            "kic-debug"
        );
    }

    #[test]
    fn debug_executable_str_matches_path() {
        let paths = ResolvedPaths::resolve();
        let as_str = paths.debug_executable_str().unwrap();
        assert_eq!(Path::new(as_str), paths.debug_executable());
    }

    #[test]
    fn display_format_is_parseable() {
        let output = ResolvedPaths::resolve().to_string();

        assert!(output.contains("host = "));
        assert!(output.contains("resource_root = "));
        assert!(output.contains("bin_dir = "));
        assert!(output.contains("debug_executable = "));
        assert!(!output.ends_with('\n'));
    }

    #[test]
    fn serializes_host_in_lowercase() {
        let json = serde_json::to_value(ResolvedPaths::for_host(HostFamily::Windows)).unwrap();
        assert_eq!(json["host"], "windows");
        assert!(json["debug_executable"].as_str().unwrap().ends_with("kic-debug.exe"));
    }
}
