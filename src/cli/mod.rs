// src/cli/mod.rs
//! CLI argument parsing and the run handler.

pub mod args;

pub use args::{Cli, OutputFormat};

use crate::config::RunConfig;
use crate::rank;
use crate::reporting::{console, json};
use anyhow::Result;

/// Runs the pipeline for the parsed arguments and renders the result.
///
/// # Errors
/// Returns error on invalid parameters or JSON serialization failure.
pub fn run(cli: &Cli) -> Result<()> {
    let config = RunConfig::new(cli.pages, cli.links, cli.seed, cli.iterations);
    let report = rank::run(&config)?;

    match cli.format {
        OutputFormat::Json => println!("{}", json::render(&report)?),
        OutputFormat::Text => {
            if cli.show_matrix {
                console::print_matrix(&report.matrix);
            }
            console::print_report(&report.outcome, &report.ranking);
        }
    }
    Ok(())
}
