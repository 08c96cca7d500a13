//! Configuration file support.
//!
//! Two configuration file locations are read:
//! - Global: `~/.clwrap/config.toml` - User-wide defaults
//! - Project: `.clwrap/config.toml` - Directory-specific overrides
//!
//! Project config takes precedence over global config. Command-line flags
//! take precedence over both.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::args::{BaseArgs, VersionSpec};

use super::errors::{ClwrapError, Result};

/// Environment variable naming a registry snapshot to use instead of the live registry.
pub const REGISTRY_ENV: &str = "CLWRAP_REGISTRY";

/// Environment variable that makes the wrappers print the command instead of running it.
pub const DRY_RUN_ENV: &str = "CLWRAP_DRY_RUN";

/// Wrapper configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fallbacks for flags missing from the command line
    pub defaults: DefaultsConfig,

    /// Where installed toolchains are looked up
    pub registry: RegistryConfig,
}

/// Fallbacks for flags missing from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Compiler version used when `-V` is absent (e.g. "14.0")
    pub compiler_version: Option<String>,

    /// SDK version used when `-sdkversion` is absent (e.g. "10.0")
    pub sdk_version: Option<String>,

    /// Architecture used when `-m` is absent (e.g. "amd64")
    pub arch: Option<String>,

    /// Always link the static CRT
    pub static_crt: bool,
}

/// Registry source settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// TOML registry snapshot to read instead of querying `reg.exe`
    pub snapshot: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ClwrapError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ClwrapError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.defaults.compiler_version.is_some() {
            self.defaults.compiler_version = other.defaults.compiler_version;
        }
        if other.defaults.sdk_version.is_some() {
            self.defaults.sdk_version = other.defaults.sdk_version;
        }
        if other.defaults.arch.is_some() {
            self.defaults.arch = other.defaults.arch;
        }
        if other.defaults.static_crt {
            self.defaults.static_crt = true;
        }

        if other.registry.snapshot.is_some() {
            self.registry.snapshot = other.registry.snapshot;
        }
    }

    /// Fill in whatever the command line left unspecified.
    pub fn apply_defaults(&self, base: &mut BaseArgs) -> Result<()> {
        if !base.compiler_version.specified {
            if let Some(ref version) = self.defaults.compiler_version {
                base.compiler_version = self.parse_version(version)?;
            }
        }
        if !base.sdk_version.specified {
            if let Some(ref version) = self.defaults.sdk_version {
                base.sdk_version = self.parse_version(version)?;
            }
        }
        if base.architecture.is_none() {
            base.architecture = self.defaults.arch.clone();
        }
        base.static_crt |= self.defaults.static_crt;

        Ok(())
    }

    fn parse_version(&self, text: &str) -> Result<VersionSpec> {
        VersionSpec::parse(text).map_err(|_| ClwrapError::Config {
            path: "[defaults]".to_string(),
            message: format!("invalid version `{}`", text),
        })
    }

    /// Snapshot path from the environment, falling back to the config file.
    pub fn registry_snapshot(&self) -> Option<PathBuf> {
        std::env::var_os(REGISTRY_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| self.registry.snapshot.clone())
    }
}

/// Get the global config directory (~/.clwrap).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".clwrap"))
}

/// Get the global config path (~/.clwrap/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (.clwrap/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".clwrap").join("config.toml")
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.clwrap/config.toml)
/// 2. Global config (~/.clwrap/config.toml)
/// 3. Defaults
pub fn load_config(global_path: &Path, project_path: &Path) -> Config {
    let mut config = Config::default();

    // Load global config first
    if global_path.exists() {
        let global = Config::load_or_default(global_path);
        config.merge(global);
    }

    // Project config overrides global
    if project_path.exists() {
        let project = Config::load_or_default(project_path);
        config.merge(project);
    }

    config
}

/// Load configuration for the current directory.
pub fn load_config_for_cwd() -> Config {
    let cwd = std::env::current_dir().unwrap_or_default();
    let project_path = project_config_path(&cwd);

    match global_config_path() {
        Some(global) => load_config(&global, &project_path),
        None => load_config(&PathBuf::new(), &project_path),
    }
}

/// Whether `CLWRAP_DRY_RUN` asks for the command line to be printed only.
pub fn dry_run_requested() -> bool {
    std::env::var(DRY_RUN_ENV)
        .map(|v| !v.is_empty() && v != "0")
        .unwrap_or(false)
}
