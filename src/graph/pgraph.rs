//! This module describes the vertex and edge data we use in petgraph to build graphs
//! the shortest path kernel can be computed on.
//!
//! A vertex has one discrete label (use `()` for unlabeled graphs) and possibly a vector of
//! continuous attributes, needed only when the kernel is asked with labels considered as attributes.  
//! Edges can be directed or not and carry a f64 weight, by default set to 1.
//! Vertices are identified by their rank of insertion, which is also their row/column in
//! the path length matrices.
//!

use std::hash::Hash;
use std::cmp::Eq;

use ndarray::Array1;

use petgraph::graph::{Graph, NodeIndex};
use petgraph::{EdgeType, Undirected, Directed};

use crate::errors::KernelError;

/// Our labels must satisfy:
/// For building path features we need Hash and Eq, and Clone as features store a copy of the labels.
/// Send + Sync is required to compute path matrices of a batch in parallel.
pub trait LabelT : Send + Sync + Eq + Hash + Clone + std::fmt::Debug {}

impl LabelT for () {}
impl LabelT for u8 {}
impl LabelT for u16 {}
impl LabelT for u32 {}
impl LabelT for u64 {}
impl LabelT for usize {}
impl LabelT for i16 {}
impl LabelT for i32 {}
impl LabelT for i64 {}
impl LabelT for char {}
impl LabelT for String {}
impl LabelT for &'static str {}


/// defines associated data to a vertex.
#[derive(Clone, Debug)]
pub struct Nweight<L> {
    /// discrete label
    label : L,
    /// continuous attributes
    attributes : Option<Array1<f64>>,
}


impl <L> Nweight<L> 
    where L : LabelT {
    ///
    pub fn new(label : L) -> Self {
        Nweight{label, attributes : None}
    }

    /// a vertex with a label and an attribute vector
    pub fn with_attributes(label : L, attributes : Array1<f64>) -> Self {
        Nweight{label, attributes : Some(attributes)}
    }

    pub fn get_label(&self) -> &L {
        &self.label
    }

    pub fn get_attributes(&self) -> Option<&Array1<f64>> {
        self.attributes.as_ref()
    }
} // end of Nweight


impl Nweight<()> {
    /// unlabeled vertex carrying only attributes
    pub fn from_attributes(attributes : Array1<f64>) -> Self {
        Nweight{label : (), attributes : Some(attributes)}
    }
}


//===================================================================================


/// A graph with labeled vertices and f64 weighted edges, on top of petgraph.
/// Ty is Undirected (default) or Directed.
pub struct SpGraph<L, Ty = Undirected> 
    where L : LabelT {
    graph : Graph<Nweight<L>, f64, Ty>,
} // end of struct SpGraph


/// a directed SpGraph
pub type DiSpGraph<L> = SpGraph<L, Directed>;


impl <L, Ty> SpGraph<L, Ty>
    where L : LabelT,
          Ty : EdgeType {

    /// an empty graph
    pub fn new() -> Self {
        SpGraph{graph : Graph::<Nweight<L>, f64, Ty>::default()}
    }

    /// wraps an already built petgraph graph
    pub fn from_graph(graph : Graph<Nweight<L>, f64, Ty>) -> Self {
        SpGraph{graph}
    }

    /// builds a graph from vertex data and unit weight edges given by vertex ranks
    pub fn from_edges(nweights : Vec<Nweight<L>>, edges : &[(usize, usize)]) -> Result<Self, KernelError> {
        let weighted : Vec<(usize, usize, f64)> = edges.iter().map(|&(a,b)| (a, b, 1.)).collect();
        Self::from_weighted_edges(nweights, &weighted)
    }

    /// builds a graph from labels and unit weight edges given by vertex ranks
    pub fn from_labeled_edges(labels : Vec<L>, edges : &[(usize, usize)]) -> Result<Self, KernelError> {
        Self::from_edges(labels.into_iter().map(Nweight::new).collect(), edges)
    }

    /// builds a graph from vertex data and weighted edges (source rank, target rank, weight)
    pub fn from_weighted_edges(nweights : Vec<Nweight<L>>, edges : &[(usize, usize, f64)]) -> Result<Self, KernelError> {
        let mut spgraph = SpGraph::<L, Ty>::new();
        for nweight in nweights {
            spgraph.add_vertex(nweight);
        }
        for &(a, b, w) in edges {
            spgraph.add_edge(a, b, w)?;
        }
        log::trace!("SpGraph::from_weighted_edges nb vertices {} nb edges {}", spgraph.nb_vertices(), spgraph.nb_edges());
        Ok(spgraph)
    } // end of from_weighted_edges

    /// adds a vertex and returns its rank
    pub fn add_vertex(&mut self, nweight : Nweight<L>) -> usize {
        self.graph.add_node(nweight).index()
    }

    /// adds an edge between vertices given by their rank
    pub fn add_edge(&mut self, a : usize, b : usize, weight : f64) -> Result<(), KernelError> {
        let nb_vertices = self.nb_vertices();
        for v in [a, b] {
            if v >= nb_vertices {
                log::error!("SpGraph::add_edge vertex {} out of range, nb vertices {}", v, nb_vertices);
                return Err(KernelError::VertexOutOfRange{vertex : v, nb_vertices});
            }
        }
        if weight.is_nan() {
            log::error!("SpGraph::add_edge NaN weight on edge ({}, {})", a, b);
            return Err(KernelError::InvalidWeight{from : a, to : b, weight});
        }
        self.graph.add_edge(NodeIndex::new(a), NodeIndex::new(b), weight);
        Ok(())
    } // end of add_edge

    ///
    pub fn nb_vertices(&self) -> usize {
        self.graph.node_count()
    }

    ///
    pub fn nb_edges(&self) -> usize {
        self.graph.edge_count()
    }

    ///
    pub fn is_directed(&self) -> bool {
        self.graph.is_directed()
    }

    /// get a reference to underlying petgraph graph
    pub fn get_graph(&self) -> &Graph<Nweight<L>, f64, Ty> {
        &self.graph
    }

    /// labels in vertex rank order
    pub fn get_labels(&self) -> Vec<L> {
        self.graph.raw_nodes().iter().map(|n| n.weight.get_label().clone()).collect()
    }

    /// attribute vectors in vertex rank order. Fails if a vertex has no attributes.
    pub fn get_attributes(&self) -> Result<Vec<Array1<f64>>, KernelError> {
        let mut attributes = Vec::<Array1<f64>>::with_capacity(self.nb_vertices());
        for (rank, node) in self.graph.raw_nodes().iter().enumerate() {
            match node.weight.get_attributes() {
                Some(attr) => { attributes.push(attr.clone()); }
                None       => {
                    log::error!("SpGraph::get_attributes vertex {} has no attributes", rank);
                    return Err(KernelError::MissingAttributes{vertex : rank});
                }
            }
        }
        Ok(attributes)
    } // end of get_attributes

} // end of impl SpGraph


impl <L, Ty> Default for SpGraph<L, Ty>
    where L : LabelT,
          Ty : EdgeType {
    fn default() -> Self {
        SpGraph::new()
    }
}


//=============================================================================


// end of mod tests
