//! Access to the hierarchical configuration store that records installed
//! toolchains (the Windows registry, or a snapshot of it).

use crate::util::errors::Result;

mod memory;
mod reg_exe;

pub use memory::MemoryRegistry;
pub use reg_exe::RegExeRegistry;

#[cfg(target_arch = "x86")]
const SOFTWARE: &str = r"HKEY_LOCAL_MACHINE\SOFTWARE\Microsoft";
#[cfg(not(target_arch = "x86"))]
const SOFTWARE: &str = r"HKEY_LOCAL_MACHINE\SOFTWARE\Wow6432Node\Microsoft";

/// Where Visual Studio versions are registered.
pub fn visual_studio_root() -> String {
    format!(r"{}\VisualStudio", SOFTWARE)
}

/// Where desktop Windows SDKs are registered.
pub fn windows_sdk_root() -> String {
    format!(r"{}\Microsoft SDKs\Windows", SOFTWARE)
}

/// Where Windows CE SDKs are registered.
pub fn wince_sdk_root() -> String {
    format!(r"{}\Microsoft SDKs\Windows CE", SOFTWARE)
}

/// Read-only view of a registry-like key/value tree.
///
/// Key paths are `\`-separated and start at a hive name.
pub trait VersionRegistry {
    /// Names of the immediate sub-keys of `path`. A missing key has none.
    fn child_keys(&self, path: &str) -> Result<Vec<String>>;

    /// A string value under `key`. `Ok(None)` when the key or value is absent.
    fn string_value(&self, key: &str, name: &str) -> Result<Option<String>>;
}
