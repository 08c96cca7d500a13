//! clwrap-cc - compile and link with `cl.exe` using gcc-style flags

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
    let code = clwrap::ops::compile(&args, &ctx)?;
    Ok(code)
}
