//! This module implements the shortest path graph kernel.
//! 
//! Each graph is represented by the multiset of the lengths of its shortest paths, between all ordered
//! pairs of distinct vertices joined by a path, possibly combined with the labels of the path extremities.
//! The kernel between two graphs is the number of matching (label, label, length) triples counted with multiplicities,
//! i.e the inner product of their histograms of path features.
//! 
//! When vertex labels are continuous attributes the histogram cannot be built and
//! the kernel compares all pairs of paths of the two graphs, weighting matching lengths by a kernel on attributes.
//!
//! Reference :
//! 
//! - Shortest-path kernels on graphs. Borgwardt-Kriegel ICDM 2005
//! 
//! - Graph Kernels : A survey. Nikolentzos-Siglidis-Vazirgiannis 2021
//  panorama of graph kernels, the shortest path kernel being one of the first kernels comparing paths.
//!


/// Defines kernel parameters.
pub mod params;

/// Path features, their enumeration and histograms.
pub mod feature;

/// Kernel matrix by explicit feature vectors.
pub mod matrix;

/// Kernel for attributed graphs.
pub mod attributed;

/// Entry points.
pub mod kernel;
