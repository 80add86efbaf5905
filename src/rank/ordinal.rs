// src/rank/ordinal.rs
//! Ordinal ranking of the final rank vector.
//!
//! Positions are assigned in ascending value order: position 1 goes to
//! the page with the smallest final value, position N to the largest.
//! This is the documented contract, inverted though it reads; do not
//! "fix" it to most-important-first without revising the contract.

use serde::Serialize;
use std::fmt;

/// A page paired with its ordinal position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankEntry {
    pub page: usize,
    pub position: usize,
}

/// The complete ordinal ranking, in position order (1 first).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ranking {
    entries: Vec<RankEntry>,
}

impl Ranking {
    /// Ranks pages by their final rank-vector values.
    ///
    /// Sorting is by value ascending with ties broken by page index, so
    /// the result is deterministic for any input. Positions are the
    /// consecutive integers `1..=N`.
    #[must_use]
    pub fn from_final_ranks(final_ranks: &[f64]) -> Self {
        let mut order: Vec<usize> = (0..final_ranks.len()).collect();
        order.sort_by(|&a, &b| {
            final_ranks[a]
                .total_cmp(&final_ranks[b])
                .then_with(|| a.cmp(&b))
        });

        let entries = order
            .into_iter()
            .enumerate()
            .map(|(slot, page)| RankEntry {
                page,
                position: slot + 1,
            })
            .collect();

        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[RankEntry] {
        &self.entries
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.entries.len()
    }

    /// The ordinal position of a page, if it was ranked.
    #[must_use]
    pub fn position_of(&self, page: usize) -> Option<usize> {
        self.entries
            .iter()
            .find(|entry| entry.page == page)
            .map(|entry| entry.position)
    }
}

impl fmt::Display for Ranking {
    /// Renders `{page ==> #position, ...}` in position order, with
    /// integral positions (no trailing `.0`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} ==> #{}", entry.page, entry.position)?;
        }
        write!(f, "}}")
    }
}
