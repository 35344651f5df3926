use std::env;
use std::fs;
use std::path::Path;

include!("../build_common.rs");

fn main() {
    let crate_dir = env::var("CARGO_MANIFEST_DIR").unwrap();

    // Process README for rustdoc (uses shared build_common.rs)
    process_readme_for_rustdoc(&crate_dir);

    // The bundled binaries live next to this crate, so its manifest directory
    // is the component root.
    println!("cargo:rustc-env=KIC_DEBUG_COMPONENT_ROOT={crate_dir}");

    println!("cargo:rerun-if-changed=build.rs");
}
