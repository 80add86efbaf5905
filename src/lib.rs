pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod matrix;
pub mod rank;
pub mod reporting;

pub use config::RunConfig;
pub use error::{RankError, Result};
pub use graph::LinkGraph;
pub use matrix::TransitionMatrix;
pub use rank::{RankOutcome, RankReport, Ranking};
