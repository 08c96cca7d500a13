//! Discovered toolchain and SDK installations.

use std::cmp::Reverse;
use std::fmt;

use serde::Serialize;

use super::arch::{Architecture, DEFAULT_CONFIGURATION};

/// An architecture a toolchain supports, evidenced by its compiler binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Configuration {
    #[serde(rename = "name", serialize_with = "serialize_arch")]
    pub arch: &'static Architecture,
    /// Full path of the probed `cl.exe`.
    pub tool_path: String,
}

fn serialize_arch<S: serde::Serializer>(
    arch: &&'static Architecture,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(arch.configuration_name)
}

/// One installed compiler or SDK.
///
/// SDK entries never carry configurations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolchainVersion {
    pub major: u16,
    pub minor: u16,
    pub install_dir: String,
    pub configurations: Vec<Configuration>,
}

impl ToolchainVersion {
    pub fn new(major: u16, minor: u16, install_dir: impl Into<String>) -> Self {
        ToolchainVersion {
            major,
            minor,
            install_dir: install_dir.into(),
            configurations: Vec::new(),
        }
    }

    /// Drop every configuration except the first one named `configuration`.
    ///
    /// Returns whether a match was kept.
    pub fn retain_only(&mut self, configuration: &str) -> bool {
        match self
            .configurations
            .iter()
            .position(|c| c.arch.configuration_name == configuration)
        {
            Some(idx) => {
                let keep = self.configurations.swap_remove(idx);
                self.configurations = vec![keep];
                true
            }
            None => {
                self.configurations.clear();
                false
            }
        }
    }

    /// The configuration used to build: the requested one, or the default
    /// x86 compiler, or the last one probed.
    pub fn active_configuration(&self, requested: Option<&str>) -> Option<&Configuration> {
        match requested {
            Some(name) => self
                .configurations
                .iter()
                .find(|c| c.arch.configuration_name == name),
            None => self
                .configurations
                .iter()
                .find(|c| c.arch.configuration_name == DEFAULT_CONFIGURATION)
                .or_else(|| self.configurations.last()),
        }
    }
}

impl fmt::Display for ToolchainVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Sort newest first; equal versions keep discovery order.
pub fn sort_by_version(versions: &mut [ToolchainVersion]) {
    versions.sort_by_key(|v| Reverse((v.major, v.minor)));
}
