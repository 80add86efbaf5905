// src/cli/args.rs
use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "linkrank", version, about = "PageRank over seeded random link graphs")]
pub struct Cli {
    /// Number of pages (vertices) in the generated graph
    #[arg(long, default_value_t = 5)]
    pub pages: usize,

    /// Number of links (directed edges) to place
    #[arg(long, default_value_t = 19)]
    pub links: usize,

    /// Seed for the deterministic graph generator
    #[arg(long, default_value_t = 20)]
    pub seed: u64,

    /// Number of power-iteration passes
    #[arg(long, default_value_t = 10)]
    pub iterations: usize,

    /// Print the transition matrix before the iteration trace
    #[arg(long)]
    pub show_matrix: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
