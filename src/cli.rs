//! Command-line surface of the converter.
//!
//! The run is a strict pipeline: open the source, parse it to completion
//! (aborting entirely on the first malformed statement), then render and
//! write the graph description in one shot. Exit codes: `1` for argument or
//! input problems, `2` for parse failures, `3` for destination write
//! failures, `0` on success.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::dot;
use crate::error::{Error, Result};
use crate::parser::OntologyParser;
use crate::taxonomy::TaxonomyGraph;

/// Render an OWL class taxonomy as a Graphviz DOT graph.
#[derive(Debug, Parser)]
#[command(name = "taxograph", version)]
#[command(about = "Render OWL class taxonomies as Graphviz DOT graphs")]
pub struct Cli {
    /// Ontology source in OWL functional syntax
    #[arg(short = 'i', value_name = "INPUT")]
    pub input: PathBuf,

    /// Destination path for the DOT graph description
    #[arg(short = 'o', value_name = "OUTPUT")]
    pub output: PathBuf,
}

/// Entry point invoked by the binary.
#[must_use]
pub fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = u8::from(err.use_stderr());
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    init_tracing();

    match run(&cli) {
        Ok(()) => {
            println!(
                "{} {}",
                "Successfully wrote taxonomy to".green(),
                cli.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => report(&err),
    }
}

/// Executes the parse-then-serialize pipeline for the given arguments.
///
/// # Errors
///
/// Surfaces the crate failure taxonomy: [`Error::InputUnavailable`],
/// [`Error::Parse`] and [`Error::DestinationWrite`].
pub fn run(cli: &Cli) -> Result<()> {
    let mut graph = TaxonomyGraph::new();

    let summary = {
        let file = File::open(&cli.input).map_err(|source| Error::InputUnavailable {
            path: cli.input.clone(),
            source,
        })?;
        OntologyParser::new().parse(BufReader::new(file), &mut graph)?
    };

    tracing::info!(
        prefixes = summary.prefixes,
        subclass_axioms = summary.subclass_axioms,
        equivalence_axioms = summary.equivalence_axioms,
        "ontology parsed"
    );

    dot::write_to_path(&graph, &cli.output)
}

fn report(err: &Error) -> ExitCode {
    eprintln!("{err}");
    match err {
        Error::InputUnavailable { .. } => {
            eprintln!("{}", Cli::command().render_usage());
            ExitCode::from(1)
        }
        Error::Parse(_) => {
            eprintln!("aborting");
            ExitCode::from(2)
        }
        Error::DestinationWrite { .. } => ExitCode::from(3),
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
