//! Host classification and the component root.
//!
//! Only the Windows family gets special treatment. Every other host,
//! supported or not, falls into `HostFamily::Other`.

use std::convert::Infallible;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;

/// Coarse operating system family of a host.
///
/// Adding a family means extending every `match` on this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HostFamily {
    /// Windows and anything built for the `windows` target family.
    Windows,
    /// Linux, macOS and every other host.
    Other,
}

impl HostFamily {
    /// Family of the host this crate was compiled for.
    pub const fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Other
        }
    }

    /// Classify an OS identifier as reported by [`std::env::consts::OS`].
    ///
    /// `"windows"` (any case) is Windows; everything else is `Other`.
    pub fn from_os(os: &str) -> Self {
        if os.trim().eq_ignore_ascii_case("windows") {
            Self::Windows
        } else {
            Self::Other
        }
    }

    /// Suffix the OS requires on executable file names.
    pub const fn executable_suffix(self) -> &'static str {
        match self {
            Self::Windows => ".exe",
            Self::Other => "",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Other => "other",
        }
    }
}

impl Default for HostFamily {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for HostFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HostFamily {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_os(s))
    }
}

/// Absolute directory this component was built from.
///
/// Recorded by the build script, so it never depends on the working directory.
pub fn resource_root() -> &'static Path {
    Path::new(env!("KIC_DEBUG_COMPONENT_ROOT"))
}
