//! Errors returned by kernel computations.
//!
//! There is no recovery inside the crate: every error aborts the current kernel computation
//! and is returned as is to the caller.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum KernelError {
    /// algorithm name not one of "dijkstra", "floyd_warshall", "auto"
    #[error("unsupported shortest path algorithm : {0}")]
    UnsupportedAlgorithm(String),
    /// label or attribute vector length does not match what is expected
    #[error("dimension mismatch, expected {expected} got {got}")]
    DimensionMismatch { expected: usize, got: usize },
    /// an edge refers to a vertex rank not in the graph
    #[error("vertex {vertex} out of range, graph has {nb_vertices} vertices")]
    VertexOutOfRange { vertex: usize, nb_vertices: usize },
    /// attribute mode asked on a vertex without attribute vector
    #[error("vertex {vertex} has no attribute vector")]
    MissingAttributes { vertex: usize },
    /// dijkstra cannot run with negative weights
    #[error("negative weight {weight} on edge ({from}, {to})")]
    NegativeWeight { from: usize, to: usize, weight: f64 },
    /// NaN edge weight
    #[error("invalid weight {weight} on edge ({from}, {to})")]
    InvalidWeight { from: usize, to: usize, weight: f64 },
    ///
    #[error("graph has a negative cycle")]
    NegativeCycle,
} // end of enum KernelError
