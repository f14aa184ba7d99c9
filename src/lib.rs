//! Dense Dijkstra - Single-Source Shortest Paths on Adjacency Matrices
//!
//! This library implements the classic O(V²) formulation of Dijkstra's
//! algorithm over a dense, weighted, optionally directed graph stored as a
//! square adjacency matrix. The dense formulation selects the next vertex by
//! a linear scan instead of a priority queue, which is the appropriate
//! trade-off when the matrix already costs O(V²) to hold.
//!
//! Graphs can be built directly through [`DenseGraph`], parsed from a
//! line-oriented text format ([`input::parse_graph`]), or read interactively
//! from any line source ([`input::InteractiveBuilder`]).

pub mod algorithm;
pub mod graph;
pub mod input;

pub use algorithm::{dijkstra::DenseDijkstra, ShortestPathAlgorithm, ShortestPathResult};
/// Re-export main types for convenient use
pub use graph::dense::DenseGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Matrix index ({0}, {1}) out of range for graph of size {2}")]
    IndexOutOfRange(usize, usize, usize),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),

    #[error("Source vertex not found in graph")]
    SourceNotFound,

    #[error("Cannot solve over an empty graph")]
    EmptyGraph,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
