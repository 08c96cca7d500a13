//! Run (or, in dry-run mode, print) an assembled command.

use crate::builder::toolchain::CommandSpec;
use crate::util::errors::Result;
use crate::util::GlobalContext;

/// Launch `cmd` with inherited streams and return the child's exit code.
///
/// In dry-run mode the command line is written to stdout and 0 is returned.
pub fn launch(cmd: &CommandSpec, ctx: &GlobalContext) -> Result<i32> {
    let line = cmd.command_line();
    tracing::info!("{}", line);

    if ctx.dry_run {
        println!("{}", line);
        return Ok(0);
    }

    cmd.to_process()?.launch()
}
