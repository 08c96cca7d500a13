//! Toolchain location and command generation.

pub mod toolchain;

pub use toolchain::{find_toolset, CommandSpec, MsvcToolchain, Toolset};
