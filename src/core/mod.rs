//! Core data model: parsed command lines, the architecture table and
//! discovered installations.

pub mod arch;
pub mod archive;
pub mod args;
pub mod cc;
pub mod version;

pub use arch::Architecture;
pub use archive::LibArgs;
pub use args::{BaseArgs, VersionSpec};
pub use cc::{CcArgs, Optimization, OutputType};
pub use version::{Configuration, ToolchainVersion};
