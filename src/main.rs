use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;

use openapi_inspect::cli::Cli;
use openapi_inspect::commands::run;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = run(&cli, &mut out)?;
    out.flush()?;

    Ok(outcome.into())
}
