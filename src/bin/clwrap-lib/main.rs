//! clwrap-lib - build static libraries with `lib.exe`

use anyhow::Result;

use clwrap::util::cli::{init_logging, report_error, wrapper_args};
use clwrap::GlobalContext;

fn main() {
    init_logging();

    let code = run().unwrap_or_else(|e| report_error(&e));
    std::process::exit(code);
}

fn run() -> Result<i32> {
    let args = wrapper_args()?;
    let ctx = GlobalContext::from_env()?;
    let code = clwrap::ops::archive(&args, &ctx)?;
    Ok(code)
}
