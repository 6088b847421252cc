//! The interface the kernel needs from a graph : its vertex count and its path length matrix
//! together with per vertex data depending on a [LabelMode].
//!
//! [SpGraph] implements it on top of petgraph, but any graph representation can be plugged in.

use ndarray::Array1;

use petgraph::EdgeType;

use crate::errors::KernelError;
use crate::spkernel::params::{Algorithm, LabelMode};

use super::paths::*;
use super::pgraph::*;


/// What is returned along the path length matrix, aligned on vertex rank.
#[derive(Clone, Debug)]
pub enum VertexData<L> {
    /// LabelMode::None
    Nothing,
    /// LabelMode::Vertex
    Labels(Vec<L>),
    /// LabelMode::Attribute
    Attributes(Vec<Array1<f64>>),
} // end of enum VertexData


/// Result of [ShortestPathProvider::build_shortest_path_matrix]
#[derive(Clone, Debug)]
pub struct SpMatrices<L> {
    /// (n,n) path lengths, f64::INFINITY for unreachable pairs
    pub lengths : PathLengthMatrix,
    ///
    pub vertex_data : VertexData<L>,
} // end of struct SpMatrices


impl <L> SpMatrices<L> {

    pub fn new(lengths : PathLengthMatrix, vertex_data : VertexData<L>) -> Self {
        SpMatrices{lengths, vertex_data}
    }

    /// labels if built in LabelMode::Vertex
    pub fn get_labels(&self) -> Option<&[L]> {
        match &self.vertex_data {
            VertexData::Labels(labels) => Some(labels),
            _ => None,
        }
    }

    /// attributes if built in LabelMode::Attribute
    pub fn get_attributes(&self) -> Option<&[Array1<f64>]> {
        match &self.vertex_data {
            VertexData::Attributes(attributes) => Some(attributes),
            _ => None,
        }
    }
} // end of impl SpMatrices



/// The graph abstraction the kernel works with.   
/// The kernel only reads the graph. Vertex order must be fixed: row u of the path matrix
/// and rank u of labels/attributes refer to the same vertex.
pub trait ShortestPathProvider {
    /// discrete vertex label type
    type Label : LabelT;
    ///
    fn vertex_count(&self) -> usize;
    /// returns path length matrix with unreachable pairs set to f64::INFINITY, and the vertex data asked by mode.
    fn build_shortest_path_matrix(&self, algorithm : Algorithm, mode : LabelMode) -> Result<SpMatrices<Self::Label>, KernelError>;
} // end of trait ShortestPathProvider



impl <L, Ty> ShortestPathProvider for SpGraph<L, Ty> 
    where L : LabelT,
          Ty : EdgeType {

    type Label = L;

    fn vertex_count(&self) -> usize {
        self.nb_vertices()
    }

    fn build_shortest_path_matrix(&self, algorithm : Algorithm, mode : LabelMode) -> Result<SpMatrices<L>, KernelError> {
        // check attributes before running the path algorithm
        let vertex_data = match mode {
            LabelMode::None      => VertexData::Nothing,
            LabelMode::Vertex    => VertexData::Labels(self.get_labels()),
            LabelMode::Attribute => VertexData::Attributes(self.get_attributes()?),
        };
        let lengths = all_pairs_shortest_paths(self.get_graph(), algorithm)?;
        Ok(SpMatrices::new(lengths, vertex_data))
    } // end of build_shortest_path_matrix

} // end of impl ShortestPathProvider for SpGraph



impl <'a, G> ShortestPathProvider for &'a G 
    where G : ShortestPathProvider {

    type Label = G::Label;

    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }

    fn build_shortest_path_matrix(&self, algorithm : Algorithm, mode : LabelMode) -> Result<SpMatrices<G::Label>, KernelError> {
        (**self).build_shortest_path_matrix(algorithm, mode)
    }
}



// end of mod tests
