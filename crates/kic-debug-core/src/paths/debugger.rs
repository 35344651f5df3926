//! kic-debug binary path resolution.
//!
//! The debugger ships prebuilt in a `bin/` directory next to this component.
//! Only the file name varies between hosts.

use std::path::PathBuf;

use super::platform::{HostFamily, resource_root};

/// Base name of the bundled debugger, without any OS suffix.
pub const DEBUG_EXECUTABLE_BASE_NAME: &str = "kic-debug";

/// Directory under the component root that holds bundled binaries.
pub const BIN_DIR_NAME: &str = "bin";

/// Get the directory containing bundled binaries.
pub fn bin_dir() -> PathBuf {
    resource_root().join(BIN_DIR_NAME)
}

/// File name of the debugger on the given host family.
pub fn debug_executable_file_name(host: HostFamily) -> String {
    format!("{DEBUG_EXECUTABLE_BASE_NAME}{}", host.executable_suffix())
}

/// Get the path to the bundled debugger for the given host family.
pub fn debug_executable_path_for(host: HostFamily) -> PathBuf {
    bin_dir().join(debug_executable_file_name(host))
}

/// Get the path to the bundled debugger for the current host.
///
/// The file is not checked for existence.
pub fn debug_executable_path() -> PathBuf {
    debug_executable_path_for(HostFamily::current())
}
