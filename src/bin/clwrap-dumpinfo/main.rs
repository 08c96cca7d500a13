//! clwrap-dumpinfo - show discovered compilers and SDKs

use anyhow::{Context, Result};
use clap::Parser;

use clwrap::registry::MemoryRegistry;
use clwrap::util::cli::{init_logging, report_error};
use clwrap::GlobalContext;

mod cli;

use cli::Cli;

fn main() {
    init_logging();

    let code = match run() {
        Ok(()) => 0,
        Err(e) => report_error(&e),
    };
    std::process::exit(code);
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut ctx = GlobalContext::from_env()?;
    if let Some(path) = cli.registry {
        ctx.registry = Box::new(MemoryRegistry::load(&path)?);
    }

    let report = clwrap::ops::dump_info(&ctx)?;

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        println!("{}", json);
    } else {
        print!("{}", clwrap::ops::format_report(&report));
    }

    Ok(())
}
