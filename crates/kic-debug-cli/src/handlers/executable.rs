//! Executable command handler.

use std::io::Write;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Print the bare executable path, suitable for `$(kic-debug-paths executable)`.
///
/// Fails rather than printing a lossy path when it is not valid UTF-8.
pub fn execute(ctx: &CliContext, out: &mut impl Write) -> Result<(), CliError> {
    let path = ctx.paths().debug_executable_str()?;
    writeln!(out, "{path}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::{CliConfig, bootstrap};
    use kic_debug_core::HostFamily;
    use std::path::Path;

    #[test]
    fn prints_single_line_path() {
        let ctx = bootstrap(CliConfig::with_defaults());
        let mut out = Vec::new();
        execute(&ctx, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert_eq!(Path::new(text.trim_end()), ctx.paths().debug_executable());
    }

    #[test]
    fn windows_preview_ends_with_exe() {
        let ctx = bootstrap(CliConfig::with_host(HostFamily::Windows));
        let mut out = Vec::new();
        execute(&ctx, &mut out).unwrap();

        assert!(String::from_utf8(out).unwrap().trim_end().ends_with("kic-debug.exe"));
    }
}
