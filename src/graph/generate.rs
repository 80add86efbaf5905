// src/graph/generate.rs
//! Seeded random graph generation.
//!
//! Produces a reproducible G(n,m)-style directed multigraph: for a given
//! `(pages, links, seed)` triple the edge sequence is identical on every
//! run. Parallel links between the same ordered pair are permitted;
//! self-loops never occur.

use crate::error::{RankError, Result};
use crate::graph::LinkGraph;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Generates a random directed graph with `pages` vertices and `links`
/// edges, driven by a ChaCha8 stream seeded from `seed`.
///
/// Each link draws a uniform source, then a uniform target from the
/// remaining `pages - 1` vertices. The target is drawn as an index into
/// the vertex set with the source removed, so no rejection loop is
/// needed and the edge stream is a pure function of the seed.
///
/// # Errors
/// `NoPages` when `pages == 0`; `UnplaceableLinks` when `pages == 1`
/// and `links > 0` (every possible edge would be a self-loop).
pub fn generate(pages: usize, links: usize, seed: u64) -> Result<LinkGraph> {
    if pages == 0 {
        return Err(RankError::NoPages);
    }
    if pages == 1 && links > 0 {
        return Err(RankError::UnplaceableLinks { links });
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut edges = Vec::with_capacity(links);

    for _ in 0..links {
        let source = rng.gen_range(0..pages);
        // Index into the vertex set with `source` removed.
        let slot = rng.gen_range(0..pages - 1);
        let target = if slot >= source { slot + 1 } else { slot };
        edges.push((source, target));
    }

    LinkGraph::new(pages, edges)
}
