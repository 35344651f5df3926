//! Paths command handler.
//!
//! Displays all resolved paths for diagnostics and debugging.

use std::io::Write;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the paths command.
///
/// Writes `key = value` lines, or a pretty-printed JSON object with `json`.
pub fn execute(ctx: &CliContext, json: bool, out: &mut impl Write) -> Result<(), CliError> {
    if json {
        serde_json::to_writer_pretty(&mut *out, ctx.paths())?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", ctx.paths())?;
    }
    Ok(())
}
