//! MSVC command assembly: gcc-style requests become `cl.exe` and `lib.exe`
//! invocations.

use crate::core::archive::LibArgs;
use crate::core::cc::{CcArgs, Optimization, OutputType};
use crate::util::fs::win_join;

use super::paths::SystemPaths;
use super::select::Toolset;
use super::CommandSpec;

/// Output name used for executables when `-o` is absent.
pub const DEFAULT_EXECUTABLE: &str = "a.exe";

/// MSVC toolchain selected for one invocation.
#[derive(Debug, Clone)]
pub struct MsvcToolchain {
    toolset: Toolset,
}

impl MsvcToolchain {
    pub fn new(toolset: Toolset) -> Self {
        MsvcToolchain { toolset }
    }

    /// Path to cl.exe for the active configuration.
    pub fn compiler_path(&self) -> &str {
        &self.toolset.configuration.tool_path
    }

    /// Path to lib.exe next to the active compiler.
    pub fn archiver_path(&self) -> String {
        let tool_dir = self.toolset.configuration.arch.tool_dir();
        win_join(&self.toolset.compiler.install_dir, &format!("{}lib.exe", tool_dir))
    }

    /// Build the `cl.exe` command line for a compile (and link) request.
    ///
    /// User include and library directories come before the system ones.
    pub fn compile_command(&self, cc: &CcArgs, system: &SystemPaths) -> CommandSpec {
        let mut cmd = CommandSpec::new(self.compiler_path())
            .search_path(self.toolset.compiler.install_dir.as_str())
            .args(["/nologo", "/EHsc", "/FS"]);

        if let Some(level) = cc.optimization {
            cmd = cmd.arg(optimization_flag(level));
        }
        if cc.warn_all {
            cmd = cmd.arg("/W3");
        }
        if cc.warn_as_error {
            cmd = cmd.arg("/WX");
        }

        // CRT linkage
        cmd = cmd.arg(if cc.base.static_crt { "/MT" } else { "/MD" });

        if cc.disable_rtti {
            cmd = cmd.arg("/GR-");
        }

        match cc.output_type {
            OutputType::ObjectFile => cmd = cmd.arg("/c"),
            OutputType::SharedLibrary => cmd = cmd.arg("/LD"),
            OutputType::Executable => {}
        }

        cmd = cmd.arg("/Zi");

        // Output
        let links = cc.output_type.links();
        let output = match (&cc.output_name, cc.output_type) {
            (Some(name), _) => Some(name.as_str()),
            (None, OutputType::Executable) => Some(DEFAULT_EXECUTABLE),
            (None, _) => None,
        };
        if let Some(name) = output {
            let flag = if links { "/Fe" } else { "/Fo" };
            cmd = cmd.path_arg(flag, name);
            if links {
                cmd = cmd.path_arg("/Fd", format!("{}.pdb", strip_extension(name)));
            }
        }

        for def in &cc.macros {
            cmd = cmd.arg(format!("/D{}", def));
        }

        for dir in cc.include_paths.iter().chain(&system.include_paths) {
            cmd = cmd.path_arg("/I", dir.as_str());
        }

        cmd = cmd.args(cc.inputs.iter().cloned());

        if links {
            for lib in &cc.base.libraries {
                cmd = cmd.arg(format!("{}.LIB", lib.to_uppercase()));
            }

            let lib_dirs: Vec<&String> = cc
                .base
                .library_paths
                .iter()
                .chain(&system.library_paths)
                .collect();
            if !lib_dirs.is_empty() || !cc.linker_options.is_empty() {
                cmd = cmd.arg("/link");
                for dir in lib_dirs {
                    cmd = cmd.path_arg("/LIBPATH:", dir.as_str());
                }
                cmd = cmd.args(cc.linker_options.iter().cloned());
            }
        }

        cmd
    }

    /// Build the `lib.exe` command: every input is passed through.
    pub fn archive_command(&self, lib: &LibArgs) -> CommandSpec {
        CommandSpec::new(self.archiver_path())
            .search_path(self.toolset.compiler.install_dir.as_str())
            .args(lib.inputs.iter().cloned())
    }
}

fn optimization_flag(level: Optimization) -> &'static str {
    match level {
        Optimization::Size => "/Os",
        Optimization::Level(0) => "/Od",
        Optimization::Level(1) => "/O1",
        Optimization::Level(2) => "/O2",
        Optimization::Level(_) => "/Ox",
    }
}

/// Drop the extension of the last path component, if any.
fn strip_extension(name: &str) -> &str {
    let start = name.rfind(['\\', '/']).map_or(0, |idx| idx + 1);
    match name[start..].rfind('.') {
        Some(dot) if dot > 0 => &name[..start + dot],
        _ => name,
    }
}
