//! Include and library directories implied by a compiler/SDK pair.

use std::cmp::Ordering;

use crate::core::arch::{Architecture, DEFAULT_SDK_ARCH};
use crate::core::version::ToolchainVersion;
use crate::util::errors::{ClwrapError, Result};
use crate::util::fs::{win_join, FileSystem};

/// Header whose presence marks a usable SDK 10 sub-version.
const SUB_VERSION_MARKER: &str = r"um\windows.h";

/// System directories appended after the user's `-I` and `-L` paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemPaths {
    pub include_paths: Vec<String>,
    pub library_paths: Vec<String>,
}

/// Compute the system include and library directories.
///
/// SDK 10 and later keep headers and libraries below a sub-version
/// directory (`include\10.0.17763.0\um`, ...), which is looked up on disk.
pub fn system_paths(
    compiler: &ToolchainVersion,
    sdk: &ToolchainVersion,
    arch: &Architecture,
    fs: &dyn FileSystem,
) -> Result<SystemPaths> {
    let mut paths = SystemPaths::default();
    let sdk_arch = arch.sdk_arch_name.unwrap_or(DEFAULT_SDK_ARCH);

    if sdk.major >= 10 {
        let sub = find_sdk_sub_version(&sdk.install_dir, fs)?;
        tracing::debug!("using SDK {} sub-version {}", sdk, sub);

        for part in ["shared", "ucrt", "um", "winrt"] {
            paths
                .include_paths
                .push(win_join(&sdk.install_dir, &format!(r"include\{}\{}", sub, part)));
        }
        for part in ["ucrt", "um"] {
            paths.library_paths.push(win_join(
                &sdk.install_dir,
                &format!(r"lib\{}\{}\{}", sub, part, sdk_arch),
            ));
        }
    } else {
        paths.include_paths.push(win_join(&sdk.install_dir, "include"));
        paths.library_paths.push(match arch.sdk_arch_name {
            Some(name) => win_join(&sdk.install_dir, &format!(r"lib\{}", name)),
            None => win_join(&sdk.install_dir, "lib"),
        });
    }

    paths
        .include_paths
        .push(win_join(&compiler.install_dir, r"..\..\VC\include"));
    paths.library_paths.push(match arch.tool_arch_name {
        Some(name) => win_join(&compiler.install_dir, &format!(r"..\..\VC\lib\{}", name)),
        None => win_join(&compiler.install_dir, r"..\..\VC\lib"),
    });

    Ok(paths)
}

/// Pick the newest sub-version directory of an SDK 10+ `include` tree that
/// contains `um\windows.h`.
pub fn find_sdk_sub_version(sdk_dir: &str, fs: &dyn FileSystem) -> Result<String> {
    let include = win_join(sdk_dir, "include");
    let not_found = || {
        ClwrapError::not_found(format!("No usable SDK sub-version found in {}", include))
            .with_help(format!("expected {} below a version directory", SUB_VERSION_MARKER))
    };

    if !fs.exists(&include) {
        return Err(not_found());
    }

    fs.list_dir(&include)?
        .into_iter()
        .filter(|entry| entry.is_dir)
        .filter(|entry| {
            let marker = win_join(&include, &format!(r"{}\{}", entry.name, SUB_VERSION_MARKER));
            fs.exists(&marker)
        })
        .map(|entry| entry.name)
        .max_by(|a, b| compare_sub_versions(a, b))
        .ok_or_else(not_found)
}

/// Dotted numeric comparison; names that are not all-numeric sort below
/// numeric ones and compare as text among themselves.
fn compare_sub_versions(a: &str, b: &str) -> Ordering {
    fn numeric(name: &str) -> Option<Vec<u32>> {
        name.split('.').map(|part| part.parse().ok()).collect()
    }

    match (numeric(a), numeric(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => a.cmp(b),
    }
}
