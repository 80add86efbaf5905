// src/matrix.rs
//! The row-stochastic transition matrix derived from link fan-out.
//!
//! Row `i`, column `j` holds the probability mass page `i` sends to page
//! `j`. Every row with at least one outgoing link sums to 1.0; a page
//! with no outgoing links yields an all-zero (dangling) row, which the
//! pipeline deliberately leaves alone.

use crate::error::{RankError, Result};
use crate::graph::LinkGraph;
use serde::Serialize;

/// Dense row-major `N x N` matrix of transition probabilities.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitionMatrix {
    n: usize,
    cells: Vec<f64>,
}

impl TransitionMatrix {
    /// Builds the transition matrix for a graph.
    ///
    /// Each link `(v, w)` contributes `1 / outDegree(v)` to cell
    /// `[v][w]`. Contributions accumulate, so parallel links from `v`
    /// to `w` end at `parallel_count / outDegree(v)` and the row sum
    /// stays at 1.0. Assigning instead of accumulating would silently
    /// drop probability mass whenever parallel links exist.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_graph(graph: &LinkGraph) -> Self {
        let n = graph.page_count();
        let mut cells = vec![0.0; n * n];
        let out_degrees = graph.out_degrees();

        for &(source, target) in graph.edges() {
            cells[source * n + target] += 1.0 / out_degrees[source] as f64;
        }

        Self { n, cells }
    }

    /// Builds a matrix from explicit rows, for callers driving the
    /// engine without a graph.
    ///
    /// # Errors
    /// `NotSquare` when any row's length differs from the row count.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        let mut cells = Vec::with_capacity(n * n);
        for row in rows {
            if row.len() != n {
                return Err(RankError::NotSquare {
                    n,
                    cells: row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(Self { n, cells })
    }

    #[must_use]
    pub fn dimension(&self) -> usize {
        self.n
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.cells[row * self.n + col]
    }

    #[must_use]
    pub fn row(&self, row: usize) -> &[f64] {
        &self.cells[row * self.n..(row + 1) * self.n]
    }

    #[must_use]
    pub fn row_sum(&self, row: usize) -> f64 {
        self.row(row).iter().sum()
    }
}
