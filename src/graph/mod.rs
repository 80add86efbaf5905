// src/graph/mod.rs
//! The link graph: a fixed set of pages and a multiset of directed links.

pub mod generate;

pub use generate::generate;

use crate::error::{RankError, Result};

/// A directed multigraph over pages `0..page_count`.
///
/// Parallel links between the same ordered pair are allowed; self-loops
/// are not. Both the page count and the edge multiset are fixed at
/// construction and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkGraph {
    pages: usize,
    edges: Vec<(usize, usize)>,
}

impl LinkGraph {
    /// Builds a graph from an explicit edge list.
    ///
    /// # Errors
    /// `NoPages` for an empty vertex set, `SelfLoop` when any edge has
    /// `source == target`, `EdgeOutOfRange` when an endpoint is not a
    /// valid page index.
    pub fn new(pages: usize, edges: Vec<(usize, usize)>) -> Result<Self> {
        if pages == 0 {
            return Err(RankError::NoPages);
        }
        for &(source, target) in &edges {
            if source >= pages || target >= pages {
                return Err(RankError::EdgeOutOfRange {
                    source,
                    target,
                    pages,
                });
            }
            if source == target {
                return Err(RankError::SelfLoop { source, target });
            }
        }
        Ok(Self { pages, edges })
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages
    }

    #[must_use]
    pub fn link_count(&self) -> usize {
        self.edges.len()
    }

    /// The edge multiset in generation order.
    #[must_use]
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Outgoing-link counts per page, parallel links counted individually.
    #[must_use]
    pub fn out_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0usize; self.pages];
        for &(source, _) in &self.edges {
            degrees[source] += 1;
        }
        degrees
    }
}
