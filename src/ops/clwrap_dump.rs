//! Report of every compiler and SDK the registry knows about.

use serde::Serialize;

use crate::builder::toolchain::discovery::{installed_compilers, installed_sdks};
use crate::core::version::ToolchainVersion;
use crate::util::errors::Result;
use crate::util::GlobalContext;

/// Discovered installations, newest first in each list.
#[derive(Debug, Clone, Serialize)]
pub struct InstallReport {
    pub compilers: Vec<ToolchainVersion>,
    pub sdks: Vec<ToolchainVersion>,
    pub wince_sdks: Vec<ToolchainVersion>,
}

/// Run discovery for compilers, desktop SDKs and WinCE SDKs.
pub fn dump_info(ctx: &GlobalContext) -> Result<InstallReport> {
    let registry = ctx.registry.as_ref();

    Ok(InstallReport {
        compilers: installed_compilers(registry, ctx.fs.as_ref())?,
        sdks: installed_sdks(registry, false)?,
        wince_sdks: installed_sdks(registry, true)?,
    })
}

/// Human-readable rendering. Empty SDK lists are omitted.
pub fn format_report(report: &InstallReport) -> String {
    let mut out = String::new();

    for compiler in &report.compilers {
        out.push_str(&format!("{}:\n", compiler));
        out.push_str(&format!("   Install Dir: {}\n", compiler.install_dir));
        out.push_str("   Configurations:");
        for config in &compiler.configurations {
            out.push(' ');
            out.push_str(config.arch.configuration_name);
        }
        out.push('\n');
    }

    for (title, sdks) in [("SDKs:", &report.sdks), ("WinCE SDKs:", &report.wince_sdks)] {
        if sdks.is_empty() {
            continue;
        }
        out.push_str(title);
        out.push('\n');
        for sdk in sdks {
            out.push_str(&format!("   {} at {}\n", sdk, sdk.install_dir));
        }
    }

    out
}
