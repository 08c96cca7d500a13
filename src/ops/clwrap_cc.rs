//! Compile-and-link wrapper: gcc-style arguments in, `cl.exe` out.

use crate::builder::toolchain::{find_toolset, system_paths, CommandSpec, MsvcToolchain};
use crate::core::cc::CcArgs;
use crate::util::errors::Result;
use crate::util::GlobalContext;

use super::launch::launch;

/// Parse `args` and resolve them into the `cl.exe` command to run.
///
/// Nothing is launched; the first failure in parsing, selection or path
/// construction is returned.
pub fn compile_command(args: &[String], ctx: &GlobalContext) -> Result<CommandSpec> {
    let mut cc = CcArgs::parse(args)?;
    ctx.config.apply_defaults(&mut cc.base)?;
    tracing::debug!("parsed compiler arguments: {:?}", cc);

    let toolset = find_toolset(&cc.base, ctx.registry.as_ref(), ctx.fs.as_ref())?;
    let system = system_paths(
        &toolset.compiler,
        &toolset.sdk,
        toolset.configuration.arch,
        ctx.fs.as_ref(),
    )?;

    Ok(MsvcToolchain::new(toolset).compile_command(&cc, &system))
}

/// Run the compiler for `args` and return its exit code.
pub fn compile(args: &[String], ctx: &GlobalContext) -> Result<i32> {
    let cmd = compile_command(args, ctx)?;
    launch(&cmd, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::fixtures::{self, SDK10_SUB_VERSION};
    use crate::util::ClwrapError;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_compile_command_uses_newest_toolset() {
        let ctx = fixtures::context();
        let cmd = compile_command(&args(&["-c", "x.c"]), &ctx).unwrap();
        let line = cmd.command_line();

        assert!(line.starts_with(
            r#""C:\Program Files (x86)\Microsoft Visual Studio 14.0\Common7\IDE\..\..\VC\bin\cl.exe" /nologo"#
        ));
        assert!(line.contains(&format!(
            r#"/I"C:\Program Files (x86)\Windows Kits\10\include\{}\um""#,
            SDK10_SUB_VERSION
        )));
        assert!(line.ends_with(r#"\..\..\VC\include" x.c"#));
    }

    #[test]
    fn test_user_paths_precede_system_paths() {
        let ctx = fixtures::context();
        let cmd = compile_command(&args(&["-Imine", "-Lmylibs", "x.c", "-lfoo"]), &ctx).unwrap();
        let line = cmd.command_line();

        let mine = line.find(r#"/I"mine""#).unwrap();
        let shared = line.find(r"\shared").unwrap();
        assert!(mine < shared);

        let user_lib = line.find(r#"/LIBPATH:"mylibs""#).unwrap();
        let ucrt_lib = line.find(r"\ucrt\x86").unwrap();
        assert!(user_lib < ucrt_lib);
        assert!(line.contains("x.c FOO.LIB /link"));
    }

    #[test]
    fn test_legacy_sdk_and_old_compiler() {
        let ctx = fixtures::context();
        let cmd = compile_command(
            &args(&["-V", "12.0", "-sdkversion", "8.1", "-mamd64", "x.c"]),
            &ctx,
        )
        .unwrap();
        let line = cmd.command_line();

        assert!(line.contains(r"Microsoft Visual Studio 12.0\Common7\IDE\..\..\VC\bin\x86_amd64\cl.exe"));
        assert!(line.contains(r#"/I"C:\Program Files (x86)\Windows Kits\8.1\include""#));
        assert!(line.contains(r#"/LIBPATH:"C:\Program Files (x86)\Windows Kits\8.1\lib\x64""#));
        assert!(line.contains(r#"12.0\Common7\IDE\..\..\VC\lib\amd64""#));
    }

    #[test]
    fn test_config_defaults_fill_gaps() {
        let mut ctx = fixtures::context();
        ctx.config.defaults.compiler_version = Some("12.0".to_string());
        ctx.config.defaults.static_crt = true;

        let line = compile_command(&args(&["x.c"]), &ctx).unwrap().command_line();
        assert!(line.contains("Microsoft Visual Studio 12.0"));
        assert!(line.contains(" /MT "));

        // The command line wins over configuration
        let line = compile_command(&args(&["-V", "14.0", "x.c"]), &ctx)
            .unwrap()
            .command_line();
        assert!(line.contains("Microsoft Visual Studio 14.0"));
    }

    #[test]
    fn test_errors_abort_before_launch() {
        let ctx = fixtures::context();

        let err = compile(&args(&["-c", "-shared", "x.c"]), &ctx).unwrap_err();
        assert!(matches!(err, ClwrapError::InvalidArgument(_)));

        let err = compile(&args(&["-sdkversion", "9.0", "x.c"]), &ctx).unwrap_err();
        assert_eq!(err.to_string(), "Could not find SDK v9.0");
    }

    #[test]
    fn test_dry_run_compile_succeeds() {
        let ctx = fixtures::context();
        assert_eq!(compile(&args(&["x.c"]), &ctx).unwrap(), 0);
    }
}
