//! Enumerate installed compilers and SDKs from the registry.
//!
//! Compilers are registered under `...\Microsoft\VisualStudio\<major>.<minor>`
//! with either an `InstallDir` value or, on older releases, a `Setup\VS`
//! sub-key whose `ProductDir` names the product root. SDKs are registered
//! under `...\Microsoft SDKs\Windows\v<major>.<minor>` with an
//! `InstallationFolder` value.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::arch::ARCHITECTURES;
use crate::core::version::{sort_by_version, Configuration, ToolchainVersion};
use crate::registry::{self, VersionRegistry};
use crate::util::errors::Result;
use crate::util::fs::{win_join, FileSystem};

/// Registry key names that denote a version; everything else is skipped.
static VERSION_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v?(\d{1,5})\.(\d{1,5})$").expect("valid regex"));

/// Parse a registry key name such as `14.0` or `v8.1`.
pub fn parse_version_key(name: &str) -> Option<(u16, u16)> {
    let caps = VERSION_KEY.captures(name)?;
    let major = caps[1].parse().ok()?;
    let minor = caps[2].parse().ok()?;
    Some((major, minor))
}

/// Every registered Visual Studio version, newest first.
///
/// A version is kept only if its install directory is known; each
/// architecture whose compiler binary exists becomes a configuration.
pub fn installed_compilers(
    registry: &dyn VersionRegistry,
    fs: &dyn FileSystem,
) -> Result<Vec<ToolchainVersion>> {
    let root = registry::visual_studio_root();
    let mut versions = Vec::new();

    for name in registry.child_keys(&root)? {
        let Some((major, minor)) = parse_version_key(&name) else {
            tracing::trace!("skipping non-version key {}", name);
            continue;
        };

        let key = format!(r"{}\{}", root, name);
        let Some(install_dir) = compiler_install_dir(registry, &key)? else {
            tracing::debug!("compiler {} has no install directory", name);
            continue;
        };

        let mut version = ToolchainVersion::new(major, minor, install_dir);
        for arch in &ARCHITECTURES {
            let tool_path = win_join(&version.install_dir, arch.tool_relative_path);
            if fs.exists(&tool_path) {
                tracing::debug!(
                    "found compiler {} -m{} at {}",
                    version,
                    arch.configuration_name,
                    tool_path
                );
                version.configurations.push(Configuration { arch, tool_path });
            }
        }

        versions.push(version);
    }

    sort_by_version(&mut versions);
    Ok(versions)
}

fn compiler_install_dir(registry: &dyn VersionRegistry, key: &str) -> Result<Option<String>> {
    if let Some(dir) = registry.string_value(key, "InstallDir")? {
        return Ok(Some(dir));
    }

    let setup = format!(r"{}\Setup\VS", key);
    let product_dir = registry.string_value(&setup, "ProductDir")?;
    Ok(product_dir.map(|dir| win_join(&dir, r"Common7\IDE")))
}

/// Every registered SDK, newest first.
///
/// `wince` selects the Windows CE root instead of the desktop one.
pub fn installed_sdks(registry: &dyn VersionRegistry, wince: bool) -> Result<Vec<ToolchainVersion>> {
    let root = if wince {
        registry::wince_sdk_root()
    } else {
        registry::windows_sdk_root()
    };
    let mut versions = Vec::new();

    for name in registry.child_keys(&root)? {
        let Some((major, minor)) = parse_version_key(&name) else {
            tracing::trace!("skipping non-version key {}", name);
            continue;
        };

        let key = format!(r"{}\{}", root, name);
        match registry.string_value(&key, "InstallationFolder")? {
            Some(dir) => {
                tracing::debug!("found SDK {}.{} at {}", major, minor, dir);
                versions.push(ToolchainVersion::new(major, minor, dir));
            }
            None => tracing::debug!("SDK {} has no installation folder", name),
        }
    }

    sort_by_version(&mut versions);
    Ok(versions)
}
