//! Static table of target architectures the Visual C++ layouts know about.

/// How one `-m` configuration maps onto a toolchain and SDK layout.
#[derive(Debug, PartialEq, Eq)]
pub struct Architecture {
    /// Compiler binary, relative to the toolchain install dir (`Common7\IDE`).
    pub tool_relative_path: &'static str,
    /// Name accepted after `-m`.
    pub configuration_name: &'static str,
    /// Sub-directory of `VC\lib` for this target, if not the default.
    pub tool_arch_name: Option<&'static str>,
    /// Sub-directory of the SDK `lib` tree for this target, if not the default.
    pub sdk_arch_name: Option<&'static str>,
}

/// Probe order matters: with no `-m`, the last configuration found wins.
pub static ARCHITECTURES: [Architecture; 4] = [
    Architecture {
        tool_relative_path: r"..\..\VC\ce\bin\x86_arm\cl.exe",
        configuration_name: "ce",
        tool_arch_name: Some("arm"),
        sdk_arch_name: Some("arm"),
    },
    Architecture {
        tool_relative_path: r"..\..\VC\bin\x86_arm\cl.exe",
        configuration_name: "woa",
        tool_arch_name: Some("arm"),
        sdk_arch_name: Some("arm"),
    },
    Architecture {
        tool_relative_path: r"..\..\VC\bin\x86_amd64\cl.exe",
        configuration_name: "amd64",
        tool_arch_name: Some("amd64"),
        sdk_arch_name: Some("x64"),
    },
    Architecture {
        tool_relative_path: r"..\..\VC\bin\cl.exe",
        configuration_name: "32",
        tool_arch_name: None,
        sdk_arch_name: None,
    },
];

/// Configuration used when no `-m` flag is given.
pub const DEFAULT_CONFIGURATION: &str = "32";

/// Configuration whose SDKs live under the WinCE registry root.
pub const WINCE_CONFIGURATION: &str = "ce";

/// SDK architecture directory used when the configuration names none.
pub const DEFAULT_SDK_ARCH: &str = "x86";

/// Look up a configuration by its `-m` name.
#[cfg(test)]
pub fn find_by_configuration(name: &str) -> Option<&'static Architecture> {
    ARCHITECTURES.iter().find(|a| a.configuration_name == name)
}

impl Architecture {
    /// Directory holding the target's tools, relative to the install dir,
    /// with its trailing separator.
    pub fn tool_dir(&self) -> &'static str {
        match self.tool_relative_path.rfind('\\') {
            Some(idx) => &self.tool_relative_path[..=idx],
            None => "",
        }
    }
}
