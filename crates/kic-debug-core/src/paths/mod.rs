//! Path resolution for the bundled `kic-debug` executable.
//!
//! - Host classification lives in `platform`
//! - The install directory and executable name live in `debugger`
//! - `ResolvedPaths` captures everything in one immutable value that the
//!   hosting application builds once and passes to whoever spawns the debugger
//!
//! Nothing here touches the filesystem.

mod debugger;
mod error;
mod platform;
mod resolver;

// Error type
pub use error::PathError;

// Platform detection and roots
pub use platform::{HostFamily, resource_root};

// Debugger binary
pub use debugger::{
    BIN_DIR_NAME, DEBUG_EXECUTABLE_BASE_NAME, bin_dir, debug_executable_file_name,
    debug_executable_path, debug_executable_path_for,
};

// Resolved value handed to collaborators
pub use resolver::ResolvedPaths;
