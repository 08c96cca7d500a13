//! Narrow discovered installations down to the ones a command line asks for.

use std::fmt;

use crate::core::arch::WINCE_CONFIGURATION;
use crate::core::args::{BaseArgs, VersionSpec};
use crate::core::version::{Configuration, ToolchainVersion};
use crate::registry::VersionRegistry;
use crate::util::errors::{ClwrapError, Result};
use crate::util::fs::FileSystem;

use super::discovery::{installed_compilers, installed_sdks};

const DUMPINFO_HELP: &str = "run `clwrap-dumpinfo` to list what is installed";

/// Which kind of installation is being selected, for error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    Compiler,
    Sdk,
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolKind::Compiler => f.write_str("compiler"),
            ToolKind::Sdk => f.write_str("SDK"),
        }
    }
}

/// Filter `candidates` (already sorted newest first) by architecture, then
/// by version.
///
/// With an architecture, each surviving compiler keeps only that
/// configuration. An empty result is an error naming the constraint that
/// removed the last candidate.
pub fn select(
    mut candidates: Vec<ToolchainVersion>,
    kind: ToolKind,
    arch: Option<&str>,
    version: &VersionSpec,
) -> Result<Vec<ToolchainVersion>> {
    if let Some(arch) = arch {
        candidates.retain_mut(|c| c.retain_only(arch));
        if candidates.is_empty() {
            return Err(
                ClwrapError::not_found(format!("No {} found to match -m{}", kind, arch))
                    .with_help(DUMPINFO_HELP),
            );
        }
    }

    if version.specified {
        candidates.retain(|c| version.matches(c.major, c.minor));
        if candidates.is_empty() {
            let what = match arch {
                Some(arch) => format!("Could not find {} v{} with -m{}", kind, version, arch),
                None => format!("Could not find {} v{}", kind, version),
            };
            return Err(ClwrapError::not_found(what).with_help(DUMPINFO_HELP));
        }
    }

    if candidates.is_empty() {
        return Err(
            ClwrapError::not_found(format!("No applicable {} found.", kind)).with_help(DUMPINFO_HELP),
        );
    }

    Ok(candidates)
}

/// The compiler, its active configuration and the SDK a build will use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolset {
    pub compiler: ToolchainVersion,
    pub configuration: Configuration,
    pub sdk: ToolchainVersion,
}

fn no_binaries(compiler: &ToolchainVersion) -> ClwrapError {
    ClwrapError::not_found(format!(
        "Compiler v{} has no cl.exe for any known architecture",
        compiler
    ))
    .with_help(format!("checked below {}", compiler.install_dir))
}

/// Discover and select the newest compiler and SDK satisfying `base`.
pub fn find_toolset(
    base: &BaseArgs,
    registry: &dyn VersionRegistry,
    fs: &dyn FileSystem,
) -> Result<Toolset> {
    let arch = base.architecture.as_deref();

    let mut compilers = select(
        installed_compilers(registry, fs)?,
        ToolKind::Compiler,
        arch,
        &base.compiler_version,
    )?;
    // Registered versions with no cl.exe on disk are skipped
    let Some(idx) = compilers
        .iter()
        .position(|compiler| compiler.active_configuration(arch).is_some())
    else {
        return Err(match compilers.first() {
            Some(newest) => no_binaries(newest),
            None => ClwrapError::not_found("No applicable compiler found."),
        });
    };
    let compiler = compilers.swap_remove(idx);
    let configuration = compiler
        .active_configuration(arch)
        .cloned()
        .ok_or_else(|| no_binaries(&compiler))?;

    let wince = arch == Some(WINCE_CONFIGURATION);
    let sdks = select(installed_sdks(registry, wince)?, ToolKind::Sdk, None, &base.sdk_version)?;
    let sdk = sdks
        .into_iter()
        .next()
        .ok_or_else(|| ClwrapError::not_found("No applicable SDK found."))?;

    tracing::info!(
        "using compiler {} (-m{}) and SDK {}",
        compiler,
        configuration.arch.configuration_name,
        sdk
    );

    Ok(Toolset {
        compiler,
        configuration,
        sdk,
    })
}
