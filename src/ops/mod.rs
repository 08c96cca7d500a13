//! High-level operations.
//!
//! This module contains the implementation of the wrapper binaries.

pub mod clwrap_cc;
pub mod clwrap_dump;
pub mod clwrap_lib;
pub mod launch;

pub use clwrap_cc::{compile, compile_command};
pub use clwrap_dump::{dump_info, format_report, InstallReport};
pub use clwrap_lib::{archive, archive_command};
pub use launch::launch;
