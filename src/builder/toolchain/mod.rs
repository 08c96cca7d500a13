//! Locate an installed Visual C++ toolchain and generate its commands.
//!
//! The pipeline is:
//! 1. [`discovery`] enumerates compilers and SDKs from the registry and
//!    probes each compiler for per-architecture `cl.exe` binaries
//! 2. [`select`] narrows the candidates by `-m`, `-V` and `-sdkversion`
//! 3. [`paths`] derives the system include and library directories
//! 4. [`MsvcToolchain`] assembles the final `cl.exe` or `lib.exe` command

mod command;
pub mod discovery;
mod msvc;
pub mod paths;
pub mod select;

pub use command::{Arg, CommandLine, CommandSpec};
pub use msvc::{MsvcToolchain, DEFAULT_EXECUTABLE};
pub use paths::{system_paths, SystemPaths};
pub use select::{find_toolset, Toolset};
