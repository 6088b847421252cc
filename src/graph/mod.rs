//! Graphs the kernel is computed on.
//!
//! The kernel only needs the interface [provider::ShortestPathProvider].
//! [pgraph::SpGraph] implements it on top of petgraph with all pairs shortest paths computed in [paths].

/// Defines vertex data and graph on top of petgraph.  
pub mod pgraph;

/// All pairs shortest paths.
pub mod paths;

/// Interface between graphs and kernel.
pub mod provider;
