//! Global context for wrapper invocations.
//!
//! Bundles the merged configuration with the registry and filesystem that
//! discovery reads from, so operations can be driven by a live machine or by
//! a snapshot in tests.

use crate::registry::{MemoryRegistry, RegExeRegistry, VersionRegistry};

use super::config::{dry_run_requested, load_config_for_cwd, Config};
use super::errors::Result;
use super::fs::{FileSystem, OsFileSystem};

/// Everything an operation needs besides its own arguments.
pub struct GlobalContext {
    pub config: Config,
    pub registry: Box<dyn VersionRegistry>,
    pub fs: Box<dyn FileSystem>,
    /// Print commands instead of running them
    pub dry_run: bool,
}

impl GlobalContext {
    /// Create a context from explicit parts.
    pub fn new(config: Config, registry: Box<dyn VersionRegistry>, fs: Box<dyn FileSystem>) -> Self {
        GlobalContext {
            config,
            registry,
            fs,
            dry_run: false,
        }
    }

    /// Build the context for the current process.
    ///
    /// The registry is a snapshot when `CLWRAP_REGISTRY` or
    /// `[registry] snapshot` names one, otherwise the live registry via
    /// `reg.exe`. Without either, nothing is installed.
    pub fn from_env() -> Result<Self> {
        let config = load_config_for_cwd();

        let registry: Box<dyn VersionRegistry> = match config.registry_snapshot() {
            Some(path) => {
                tracing::debug!("reading registry snapshot {}", path.display());
                Box::new(MemoryRegistry::load(&path)?)
            }
            None => match RegExeRegistry::detect() {
                Some(reg) => Box::new(reg),
                None => {
                    tracing::warn!("reg.exe not found; no toolchains can be discovered");
                    Box::new(MemoryRegistry::new())
                }
            },
        };

        let mut ctx = GlobalContext::new(config, registry, Box::new(OsFileSystem));
        ctx.dry_run = dry_run_requested();
        Ok(ctx)
    }

    /// Override dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

impl std::fmt::Debug for GlobalContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlobalContext")
            .field("config", &self.config)
            .field("dry_run", &self.dry_run)
            .finish_non_exhaustive()
    }
}
