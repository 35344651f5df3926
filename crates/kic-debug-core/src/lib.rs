#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod paths;

// Re-export path utilities
pub use paths::{
    BIN_DIR_NAME, DEBUG_EXECUTABLE_BASE_NAME, HostFamily, PathError, ResolvedPaths, bin_dir,
    debug_executable_file_name, debug_executable_path, debug_executable_path_for, resource_root,
};
