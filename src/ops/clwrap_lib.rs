//! Archive wrapper: base flags select the toolset, everything else goes to
//! `lib.exe` untouched.

use crate::builder::toolchain::{find_toolset, CommandSpec, MsvcToolchain};
use crate::core::archive::LibArgs;
use crate::util::errors::Result;
use crate::util::GlobalContext;

use super::launch::launch;

/// Parse `args` and resolve them into the `lib.exe` command to run.
pub fn archive_command(args: &[String], ctx: &GlobalContext) -> Result<CommandSpec> {
    let mut lib = LibArgs::parse(args)?;
    ctx.config.apply_defaults(&mut lib.base)?;

    let toolset = find_toolset(&lib.base, ctx.registry.as_ref(), ctx.fs.as_ref())?;
    Ok(MsvcToolchain::new(toolset).archive_command(&lib))
}

/// Run the librarian for `args` and return its exit code.
pub fn archive(args: &[String], ctx: &GlobalContext) -> Result<i32> {
    let cmd = archive_command(args, ctx)?;
    launch(&cmd, ctx)
}
