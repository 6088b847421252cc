//! Shortest path graph kernel.
//!
//! Computes similarity between labeled graphs from the shortest paths they contain, as a
//! building block for kernel methods on graph data.
//! See [spkernel] for the kernel and [graph] for the graph interface.

pub mod errors;

pub mod graph;

pub mod spkernel;

pub mod prelude;
