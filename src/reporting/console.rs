// src/reporting/console.rs
//! Console rendering of the iteration trace and final rankings.

use crate::matrix::TransitionMatrix;
use crate::rank::{RankOutcome, Ranking};
use colored::Colorize;
use std::fmt::Write;

const SEPARATOR: &str = "--------------------------------";

/// Renders the per-iteration trace: a header per pass, one
/// `page: value` line per page, then a separator.
#[must_use]
pub fn render_trace(outcome: &RankOutcome) -> String {
    let mut out = String::new();
    for record in &outcome.trace {
        let _ = writeln!(out, "ITERATION {})", record.iteration);
        for (page, value) in record.values.iter().enumerate() {
            let _ = writeln!(out, "{page}: {value}");
        }
        let _ = writeln!(out, "{SEPARATOR}");
    }
    out
}

/// Renders the transition matrix, one `| ... |` delimited row per page.
#[must_use]
pub fn render_matrix(matrix: &TransitionMatrix) -> String {
    let mut out = String::new();
    for row in 0..matrix.dimension() {
        out.push_str("| ");
        for col in 0..matrix.dimension() {
            let _ = write!(out, "{} ", matrix.get(row, col));
        }
        out.push_str(" |\n");
    }
    out
}

/// Prints the trace followed by the final rankings.
pub fn print_report(outcome: &RankOutcome, ranking: &Ranking) {
    print!("{}", render_trace(outcome));
    println!("{}", "Final Page Rankings: ".bold());
    println!("{ranking}");
}

/// Prints the transition matrix under a dimmed header.
pub fn print_matrix(matrix: &TransitionMatrix) {
    println!("{}", "Transition Matrix:".dimmed());
    print!("{}", render_matrix(matrix));
    println!("{SEPARATOR}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::engine::power_iterate;

    #[test]
    fn test_trace_format() {
        let matrix =
            TransitionMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
        let outcome = power_iterate(&matrix, 1).unwrap();
        let text = render_trace(&outcome);
        assert_eq!(text, "ITERATION 1)\n0: 0.5\n1: 0.5\n--------------------------------\n");
    }

    #[test]
    fn test_trace_empty_for_zero_iterations() {
        let matrix = TransitionMatrix::from_rows(vec![vec![0.0]]).unwrap();
        let outcome = power_iterate(&matrix, 0).unwrap();
        assert!(render_trace(&outcome).is_empty());
    }

    #[test]
    fn test_matrix_rendering() {
        let matrix =
            TransitionMatrix::from_rows(vec![vec![0.0, 1.0], vec![0.5, 0.5]]).unwrap();
        assert_eq!(render_matrix(&matrix), "| 0 1  |\n| 0.5 0.5  |\n");
    }
}
