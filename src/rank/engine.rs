// src/rank/engine.rs
//! The power-iteration engine.
//!
//! Propagates a rank vector across the transition matrix for a fixed
//! number of passes. There is no damping factor, no convergence check,
//! and no normalization: the iteration count is the caller's contract.
//! The engine returns structured data; rendering lives in `reporting`.

use crate::error::{RankError, Result};
use crate::matrix::TransitionMatrix;
use serde::Serialize;

/// One iteration's snapshot: the 1-based pass number and the full
/// propagated vector after that pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IterationRecord {
    pub iteration: usize,
    pub values: Vec<f64>,
}

/// The engine's result: every intermediate vector plus the final one.
///
/// `final_ranks` always equals the last trace entry's values (or the
/// initial uniform vector when zero iterations were requested).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankOutcome {
    pub trace: Vec<IterationRecord>,
    pub final_ranks: Vec<f64>,
}

/// Runs power iteration from the uniform `1/N` starting vector.
///
/// # Errors
/// `NoPages` for a zero-dimension matrix.
#[allow(clippy::cast_precision_loss)]
pub fn power_iterate(matrix: &TransitionMatrix, iterations: usize) -> Result<RankOutcome> {
    let n = matrix.dimension();
    if n == 0 {
        return Err(RankError::NoPages);
    }
    let uniform = vec![1.0 / n as f64; n];
    power_iterate_from(matrix, uniform, iterations)
}

/// Runs power iteration from a caller-supplied starting vector.
///
/// Each pass computes `next[j] = sum_i matrix[i][j] * rank[i]` over all
/// rows `i` (the rank row-vector left-multiplied by the matrix), then
/// replaces the whole vector before the next pass begins.
///
/// # Errors
/// `NoPages` for a zero-dimension matrix; `DimensionMismatch` when the
/// starting vector's length differs from the matrix dimension.
pub fn power_iterate_from(
    matrix: &TransitionMatrix,
    initial: Vec<f64>,
    iterations: usize,
) -> Result<RankOutcome> {
    let n = matrix.dimension();
    if n == 0 {
        return Err(RankError::NoPages);
    }
    if initial.len() != n {
        return Err(RankError::DimensionMismatch {
            vector: initial.len(),
            matrix: n,
        });
    }

    let mut rank = initial;
    let mut trace = Vec::with_capacity(iterations);

    for iteration in 1..=iterations {
        let mut next = vec![0.0; n];
        for (col, slot) in next.iter_mut().enumerate() {
            let mut mass = 0.0;
            for (row, &incoming) in rank.iter().enumerate() {
                mass += matrix.get(row, col) * incoming;
            }
            *slot = mass;
        }
        rank = next;
        trace.push(IterationRecord {
            iteration,
            values: rank.clone(),
        });
    }

    Ok(RankOutcome {
        trace,
        final_ranks: rank,
    })
}
