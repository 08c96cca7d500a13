//! A typical machine: three Visual Studio releases and several SDKs.
//!
//! | Item      | Registered as                   | Binaries / markers              |
//! |-----------|---------------------------------|---------------------------------|
//! | VS 14.0   | `InstallDir`                    | woa, amd64, x86                 |
//! | VS 12.0   | `Setup\VS\ProductDir`           | amd64, x86                      |
//! | VS 10.0   | `InstallDir`                    | x86                             |
//! | SDK 10.0  | `v10.0`                         | 10.0.10240.0, 10.0.17763.0      |
//! | SDK 8.1   | `v8.1` (and a `v8.1A` to skip)  |                                 |
//! | SDK 7.1   | `v7.1`                          |                                 |
//! | CE SDK 8.0| WinCE `v8.0`                    |                                 |

use crate::registry::{self, MemoryRegistry};
use crate::util::{Config, GlobalContext};

use super::MemoryFileSystem;

pub const VS14: &str = r"C:\Program Files (x86)\Microsoft Visual Studio 14.0\Common7\IDE\";
pub const VS12_PRODUCT: &str = r"C:\Program Files (x86)\Microsoft Visual Studio 12.0\";
pub const VS12: &str = r"C:\Program Files (x86)\Microsoft Visual Studio 12.0\Common7\IDE";
pub const VS10: &str = r"C:\Program Files (x86)\Microsoft Visual Studio 10.0\Common7\IDE\";

pub const SDK10: &str = r"C:\Program Files (x86)\Windows Kits\10\";
pub const SDK81: &str = r"C:\Program Files (x86)\Windows Kits\8.1\";
pub const SDK71: &str = r"C:\Program Files\Microsoft SDKs\Windows\v7.1\";
pub const WINCE80: &str = r"C:\Program Files (x86)\Windows CE Tools\SDKs\8.0\";

/// The newest SDK 10 sub-version carrying `um\windows.h`.
pub const SDK10_SUB_VERSION: &str = "10.0.17763.0";

/// Registry contents for the machine described above.
pub fn registry() -> MemoryRegistry {
    let vs = registry::visual_studio_root();
    let sdk = registry::windows_sdk_root();
    let ce = registry::wince_sdk_root();

    let mut registry = MemoryRegistry::new()
        .with_value(format!(r"{vs}\14.0"), "InstallDir", VS14)
        .with_value(format!(r"{vs}\12.0\Setup\VS"), "ProductDir", VS12_PRODUCT)
        .with_value(format!(r"{vs}\10.0"), "InstallDir", VS10)
        .with_value(format!(r"{sdk}\v10.0"), "InstallationFolder", SDK10)
        .with_value(format!(r"{sdk}\v8.1"), "InstallationFolder", SDK81)
        .with_value(format!(r"{sdk}\v8.1A"), "InstallationFolder", r"C:\Kits\8.1A")
        .with_value(format!(r"{sdk}\v7.1"), "InstallationFolder", SDK71)
        .with_value(format!(r"{ce}\v8.0"), "InstallationFolder", WINCE80);
    registry.add_key(format!(r"{vs}\14.0_Config"));
    registry
}

/// Compiler binaries and SDK 10 headers for the machine described above.
pub fn filesystem() -> MemoryFileSystem {
    let mut fs = MemoryFileSystem::new();

    for rel in [
        r"..\..\VC\bin\x86_arm\cl.exe",
        r"..\..\VC\bin\x86_amd64\cl.exe",
        r"..\..\VC\bin\cl.exe",
    ] {
        fs.add_file(&format!("{VS14}{rel}"));
    }
    for rel in [r"..\..\VC\bin\x86_amd64\cl.exe", r"..\..\VC\bin\cl.exe"] {
        fs.add_file(&format!(r"{VS12}\{rel}"));
    }
    fs.add_file(&format!(r"{VS10}..\..\VC\bin\cl.exe"));

    fs.add_file(&format!(r"{SDK10}include\10.0.10240.0\um\windows.h"));
    fs.add_file(&format!(r"{SDK10}include\{SDK10_SUB_VERSION}\um\windows.h"));
    // Newer, but incomplete: no windows.h
    fs.add_dir(&format!(r"{SDK10}include\10.0.18362.0\shared"));
    fs.add_file(&format!(r"{SDK10}include\wdf.txt"));

    fs
}

/// A dry-run context over this machine with default configuration.
pub fn context() -> GlobalContext {
    GlobalContext::new(Config::default(), Box::new(registry()), Box::new(filesystem()))
        .with_dry_run(true)
}
