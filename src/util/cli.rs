//! Process-level plumbing shared by the wrapper binaries.

use std::ffi::OsString;

use miette::Diagnostic;
use tracing_subscriber::EnvFilter;

use super::errors::{ClwrapError, Result};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "CLWRAP_LOG";

const DEFAULT_FILTER: &str = "clwrap=warn";

/// Install the stderr log subscriber.
///
/// Stdout is left alone: it belongs to the launched tool (or to the dry-run
/// command line).
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// The command-line arguments after the program name.
pub fn wrapper_args() -> Result<Vec<String>> {
    collect_args(std::env::args_os().skip(1))
}

/// Arguments that are not valid Unicode are rejected rather than mangled.
fn collect_args(args: impl IntoIterator<Item = OsString>) -> Result<Vec<String>> {
    args.into_iter()
        .map(|arg| {
            arg.into_string().map_err(|arg| {
                ClwrapError::invalid_argument(format!(
                    "argument is not valid Unicode: {}",
                    arg.to_string_lossy()
                ))
            })
        })
        .collect()
}

/// One-line diagnostic for `err`, with any help text appended.
fn diagnostic(err: &anyhow::Error) -> String {
    let help = err
        .downcast_ref::<ClwrapError>()
        .and_then(|e| e.help().map(|help| help.to_string()));

    match help {
        Some(help) => format!("error: {:#} (help: {})", err, help),
        None => format!("error: {:#}", err),
    }
}

/// Print `err` to stderr and return the exit code for it.
pub fn report_error(err: &anyhow::Error) -> i32 {
    eprintln!("{}", diagnostic(err));

    err.downcast_ref::<ClwrapError>()
        .map_or(1, ClwrapError::exit_code)
}
