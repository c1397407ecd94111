//! Command dispatch: runs one query and turns its outcome into output.
//!
//! This is the only layer that knows about not-found outcomes being printed
//! and mapped to a failing exit status. The query engine itself returns typed
//! errors and never writes anything.

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::document::tree::Document;
use crate::file::loader::{load_document, load_document_from_stdin};
use crate::output::{render_operation, render_routes, render_schema};
use crate::query::{QueryEngine, QueryError};
use anyhow::Result;
use std::io::Write;
use std::process::ExitCode;

/// File argument that selects stdin.
pub const STDIN_PATH: &str = "-";

/// How a command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// A path, method or schema was not found; the message has been printed
    NotFound,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::NotFound => ExitCode::FAILURE,
        }
    }
}

/// Loads config and document for `cli`, then executes its command.
///
/// # Errors
///
/// Returns an error if an explicit config file is unusable, if the document
/// can't be loaded, or if the queried section of the document is malformed.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<Outcome> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };

    let document = if cli.file == STDIN_PATH {
        load_document_from_stdin()?
    } else {
        load_document(&cli.file)?
    };

    execute(&document, &cli.command, &config, out)
}

/// Executes one command against an already loaded document.
pub fn execute<W: Write>(
    document: &Document,
    command: &Command,
    config: &Config,
    out: &mut W,
) -> Result<Outcome> {
    let engine = QueryEngine::new(document);

    let lines = match command {
        Command::Paths => render_routes(&engine.list_routes()),
        Command::Path { path, method } => match engine.describe_operation(path, method) {
            Ok(detail) => render_operation(&detail),
            Err(err) => return report(err, out),
        },
        Command::Schema { name, format } => match engine.get_schema(name) {
            Ok(schema) => {
                let format = format.unwrap_or_else(|| config.dump_format());
                vec![render_schema(schema, format, config.indent_size)?]
            }
            Err(err) => return report(err, out),
        },
    };

    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(Outcome::Success)
}

fn report<W: Write>(err: QueryError, out: &mut W) -> Result<Outcome> {
    if !err.is_not_found() {
        return Err(err.into());
    }
    writeln!(out, "{}", err)?;
    Ok(Outcome::NotFound)
}
