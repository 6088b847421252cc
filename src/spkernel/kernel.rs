//! Entry points of the shortest path kernel.
//!
//! [ShortestPathKernel] gathers parameters and the attribute kernel and dispatches
//! to the histogram computation or to the attributed pair kernel according to params.as_attributes.
//!

use ndarray::Array2;

use crate::errors::KernelError;
use crate::graph::provider::ShortestPathProvider;

use super::params::*;
use super::matrix::compute_kernel_matrix;
use super::attributed::*;


pub struct ShortestPathKernel<K = DotProduct> 
    where K : AttributeKernel {
    ///
    params : SpKernelParams,
    /// used only if params.as_attributes is true
    attribute_kernel : K,
} // end of struct ShortestPathKernel


impl ShortestPathKernel<DotProduct> {
    /// kernel with dot product between attributes
    pub fn new(params : SpKernelParams) -> Self {
        ShortestPathKernel{params, attribute_kernel : DotProduct}
    }
}


impl <K> ShortestPathKernel<K> 
    where K : AttributeKernel {

    pub fn with_attribute_kernel(params : SpKernelParams, attribute_kernel : K) -> Self {
        ShortestPathKernel{params, attribute_kernel}
    }

    ///
    pub fn get_params(&self) -> &SpKernelParams {
        &self.params
    }

    /// kernel value between two graphs
    pub fn compute<G>(&self, g_x : &G, g_y : &G) -> Result<f64, KernelError> 
        where G : ShortestPathProvider + Sync,
              G::Label : Send {
        //
        if self.params.as_attributes() {
            shortest_path_pair_attributes(g_x, g_y, self.params.get_algorithm(), &self.attribute_kernel)
        }
        else {
            let kernel = compute_kernel_matrix(std::slice::from_ref(g_x), Some(std::slice::from_ref(g_y)), &self.params)?;
            Ok(kernel[[0,0]])
        }
    } // end of compute

    /// Kernel matrix, (ny, nx) with rows corresponding to graphs_y, or (nx, nx) if graphs_y is None.
    pub fn compute_matrix<G>(&self, graphs_x : &[G], graphs_y : Option<&[G]>) -> Result<Array2<f64>, KernelError> 
        where G : ShortestPathProvider + Sync,
              G::Label : Send,
              K : Sync {
        //
        if self.params.as_attributes() {
            shortest_path_attributes_matrix(graphs_x, graphs_y, &self.params, &self.attribute_kernel)
        }
        else {
            compute_kernel_matrix(graphs_x, graphs_y, &self.params)
        }
    } // end of compute_matrix

} // end of impl ShortestPathKernel



/// Kernel value between two graphs, with dot product as attribute kernel.
pub fn compute_kernel<G>(g_x : &G, g_y : &G, params : &SpKernelParams) -> Result<f64, KernelError> 
    where G : ShortestPathProvider + Sync,
          G::Label : Send {
    ShortestPathKernel::new(*params).compute(g_x, g_y)
}



// end of mod tests
