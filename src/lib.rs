//! clwrap - gcc-style front ends for the Microsoft Visual C++ toolchain
//!
//! This crate translates Unix-style compiler and archiver command lines into
//! `cl.exe` and `lib.exe` invocations, picking the newest installed compiler
//! and Windows SDK that satisfy the requested version and architecture.

pub mod builder;
pub mod core;
pub mod ops;
pub mod registry;
pub mod util;

/// Test utilities for clwrap unit tests.
///
/// This module is only available when compiling with `--cfg test`. It
/// provides an in-memory filesystem and a fixture machine layout.
#[cfg(test)]
pub mod test_support;

pub use self::core::{BaseArgs, CcArgs, LibArgs, ToolchainVersion, VersionSpec};
pub use util::context::GlobalContext;
pub use util::errors::{ClwrapError, Result};
