// src/error.rs
//
// `thiserror`'s derive treats any field named `source` as the error's
// source and requires it to implement `std::error::Error`, which `usize`
// does not. The `Display` and `Error` impls are written by hand to keep
// the `source` field name in the public API.
use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum RankError {
    NoPages,

    UnplaceableLinks { links: usize },

    SelfLoop { source: usize, target: usize },

    EdgeOutOfRange {
        source: usize,
        target: usize,
        pages: usize,
    },

    NotSquare { n: usize, cells: usize },

    DimensionMismatch { vector: usize, matrix: usize },
}

impl fmt::Display for RankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankError::NoPages => {
                write!(f, "graph must contain at least one page")
            }
            RankError::UnplaceableLinks { links } => {
                write!(
                    f,
                    "cannot place {links} links on a single page without self-loops"
                )
            }
            RankError::SelfLoop { source, target } => {
                write!(f, "edge ({source}, {target}) is a self-loop")
            }
            RankError::EdgeOutOfRange {
                source,
                target,
                pages,
            } => {
                write!(
                    f,
                    "edge ({source}, {target}) references a page outside 0..{pages}"
                )
            }
            RankError::NotSquare { n, cells } => {
                write!(
                    f,
                    "row of {cells} cells does not fit a {n}x{n} transition matrix"
                )
            }
            RankError::DimensionMismatch { vector, matrix } => {
                write!(
                    f,
                    "rank vector has {vector} entries but the matrix dimension is {matrix}"
                )
            }
        }
    }
}

impl std::error::Error for RankError {}

pub type Result<T> = std::result::Result<T, RankError>;
