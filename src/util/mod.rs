//! Utility modules.

pub mod cli;
pub mod config;
pub mod context;
pub mod errors;
pub mod fs;
pub mod process;

pub use config::Config;
pub use context::GlobalContext;
pub use errors::{ClwrapError, Result};
pub use fs::{FileSystem, OsFileSystem};
pub use process::ProcessBuilder;
