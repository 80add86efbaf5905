// src/rank/mod.rs
//! Pipeline orchestration: generate, build, iterate, rank.

pub mod engine;
pub mod ordinal;

pub use engine::{IterationRecord, RankOutcome};
pub use ordinal::{RankEntry, Ranking};

use crate::config::RunConfig;
use crate::error::Result;
use crate::graph;
use crate::matrix::TransitionMatrix;
use serde::Serialize;

/// Everything one run produces, each stage's output handed forward as a
/// fresh value. No stage mutates another's output.
#[derive(Debug, Clone, Serialize)]
pub struct RankReport {
    pub config: RunConfig,
    pub matrix: TransitionMatrix,
    pub outcome: RankOutcome,
    pub ranking: Ranking,
}

/// Runs the full pipeline for a configuration.
///
/// # Errors
/// Propagates validation failures from the configuration and generator;
/// the later stages cannot fail once a valid graph exists.
pub fn run(config: &RunConfig) -> Result<RankReport> {
    config.validate()?;
    let graph = graph::generate(config.pages, config.links, config.seed)?;
    let matrix = TransitionMatrix::from_graph(&graph);
    let outcome = engine::power_iterate(&matrix, config.iterations)?;
    let ranking = Ranking::from_final_ranks(&outcome.final_ranks);
    Ok(RankReport {
        config: *config,
        matrix,
        outcome,
        ranking,
    })
}
