// src/config.rs
//! Run parameters for a single ranking pipeline invocation.

use crate::error::{RankError, Result};
use serde::Serialize;

/// The four knobs the pipeline exposes. Nothing else is configurable.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RunConfig {
    /// Number of pages (vertices) in the generated graph.
    pub pages: usize,
    /// Number of links (directed edges) to place.
    pub links: usize,
    /// Seed for the deterministic edge sampler.
    pub seed: u64,
    /// How many power-iteration passes to run.
    pub iterations: usize,
}

impl RunConfig {
    #[must_use]
    pub fn new(pages: usize, links: usize, seed: u64, iterations: usize) -> Self {
        Self {
            pages,
            links,
            seed,
            iterations,
        }
    }

    /// Validates the parameters before any work starts.
    ///
    /// # Errors
    /// `NoPages` for an empty graph; `UnplaceableLinks` when every
    /// possible edge on a one-page graph would be a self-loop.
    pub fn validate(&self) -> Result<()> {
        if self.pages == 0 {
            return Err(RankError::NoPages);
        }
        if self.pages == 1 && self.links > 0 {
            return Err(RankError::UnplaceableLinks { links: self.links });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_single_isolated_page() {
        assert!(RunConfig::new(1, 0, 7, 10).validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_pages() {
        let err = RunConfig::new(0, 5, 7, 10).validate().unwrap_err();
        assert_eq!(err, RankError::NoPages);
    }

    #[test]
    fn test_rejects_links_on_single_page() {
        let err = RunConfig::new(1, 3, 7, 10).validate().unwrap_err();
        assert_eq!(err, RankError::UnplaceableLinks { links: 3 });
    }
}
