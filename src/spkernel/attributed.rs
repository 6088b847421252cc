//! Shortest path kernel for graphs whose vertices carry continuous attribute vectors.
//!
//! No enumeration of features is possible, so the kernel compares directly the path lengths of all
//! ordered pairs (i,j) of the first graph with all ordered pairs (k,m) of the second graph.
//! When lengths are equal and finite the pair contributes
//! katt(x_i, y_k) * katt(x_j, y_m) where katt is an [AttributeKernel].
//! The cost is O(n^4) attribute kernel evaluations for graphs of n vertices.
//!
//! Lengths are compared with exact equality, they must be computed consistently
//! (integer hop counts, or same float accumulation on both graphs).
//!

use ndarray::{Array1, Array2, ArrayView1};
use rayon::prelude::*;

use crate::errors::KernelError;
use crate::graph::paths::PathLengthMatrix;
use crate::graph::provider::*;
use crate::spkernel::params::*;


/// A kernel between two vertex attribute vectors.  
/// Any function or closure Fn(ArrayView1\<f64\>, ArrayView1\<f64\>) -> Result\<f64, KernelError\> is an AttributeKernel.
pub trait AttributeKernel {
    fn eval(&self, x : ArrayView1<f64>, y : ArrayView1<f64>) -> Result<f64, KernelError>;
}


impl <F> AttributeKernel for F 
    where F : Fn(ArrayView1<f64>, ArrayView1<f64>) -> Result<f64, KernelError> {
    fn eval(&self, x : ArrayView1<f64>, y : ArrayView1<f64>) -> Result<f64, KernelError> {
        self(x, y)
    }
}


fn check_same_dim(x : &ArrayView1<f64>, y : &ArrayView1<f64>) -> Result<(), KernelError> {
    if x.len() != y.len() {
        log::error!("attribute kernel, vectors of length {} and {}", x.len(), y.len());
        return Err(KernelError::DimensionMismatch{expected : x.len(), got : y.len()});
    }
    Ok(())
}


/// The default attribute kernel : sum_i x_i * y_i
#[derive(Debug, Copy, Clone, Default)]
pub struct DotProduct;

impl AttributeKernel for DotProduct {
    fn eval(&self, x : ArrayView1<f64>, y : ArrayView1<f64>) -> Result<f64, KernelError> {
        check_same_dim(&x, &y)?;
        Ok(x.dot(&y))
    }
}


/// exp(- gamma * ||x - y||^2)
#[derive(Debug, Copy, Clone)]
pub struct GaussianRbf {
    pub gamma : f64,
}

impl GaussianRbf {
    pub fn new(gamma : f64) -> Self {
        GaussianRbf{gamma}
    }
}

impl AttributeKernel for GaussianRbf {
    fn eval(&self, x : ArrayView1<f64>, y : ArrayView1<f64>) -> Result<f64, KernelError> {
        check_same_dim(&x, &y)?;
        let dist2 : f64 = x.iter().zip(y.iter()).map(|(a, b)| (a - b) * (a - b)).sum();
        Ok((-self.gamma * dist2).exp())
    }
}


//===================================================================================


fn check_path_and_attributes(lengths : &PathLengthMatrix, attributes : &[Array1<f64>]) -> Result<(), KernelError> {
    let (nb_rows, nb_cols) = lengths.dim();
    if nb_rows != nb_cols {
        log::error!("non square path matrix ({}, {})", nb_rows, nb_cols);
        return Err(KernelError::DimensionMismatch{expected : nb_rows, got : nb_cols});
    }
    if attributes.len() != nb_rows {
        log::error!("got {} attribute vectors for {} vertices", attributes.len(), nb_rows);
        return Err(KernelError::DimensionMismatch{expected : nb_rows, got : attributes.len()});
    }
    Ok(())
} // end of check_path_and_attributes



/// The O(n^4) accumulation on path matrices and attributes of two graphs.
pub fn attributed_pair_kernel<K>(s_x : &PathLengthMatrix, attr_x : &[Array1<f64>], 
                s_y : &PathLengthMatrix, attr_y : &[Array1<f64>], attribute_kernel : &K) -> Result<f64, KernelError> 
    where K : AttributeKernel + ?Sized {
    //
    check_path_and_attributes(s_x, attr_x)?;
    check_path_and_attributes(s_y, attr_y)?;
    let dim_x = s_x.nrows();
    let dim_y = s_y.nrows();
    //
    let mut kernel = 0.;
    for i in 0..dim_x {
        for j in 0..dim_x {
            let length = s_x[[i,j]];
            if i == j || length.is_infinite() {
                continue;
            }
            for k in 0..dim_y {
                for m in 0..dim_y {
                    if k == m || s_y[[k,m]] != length {
                        continue;
                    }
                    kernel += attribute_kernel.eval(attr_x[i].view(), attr_y[k].view())? 
                            * attribute_kernel.eval(attr_x[j].view(), attr_y[m].view())?;
                }
            }
        }
    }
    Ok(kernel)
} // end of attributed_pair_kernel



// attributes of a graph built in attribute mode
fn get_attributes<L>(sp : &SpMatrices<L>) -> Result<&[Array1<f64>], KernelError> {
    match sp.get_attributes() {
        Some(attributes) => Ok(attributes),
        None => {
            log::error!("graph returned no attributes in attribute label mode");
            Err(KernelError::DimensionMismatch{expected : sp.lengths.nrows(), got : 0})
        }
    }
} // end of get_attributes



/// Shortest path kernel between two attributed graphs.
pub fn shortest_path_pair_attributes<G, H, K>(g_x : &G, g_y : &H, algorithm : Algorithm, attribute_kernel : &K) -> Result<f64, KernelError> 
    where G : ShortestPathProvider,
          H : ShortestPathProvider,
          K : AttributeKernel + ?Sized {
    //
    let sp_x = g_x.build_shortest_path_matrix(algorithm, LabelMode::Attribute)?;
    let sp_y = g_y.build_shortest_path_matrix(algorithm, LabelMode::Attribute)?;
    let kernel = attributed_pair_kernel(&sp_x.lengths, get_attributes(&sp_x)?, &sp_y.lengths, get_attributes(&sp_y)?, attribute_kernel)?;
    log::trace!("shortest_path_pair_attributes dims ({}, {}) kernel {:.3e}", sp_x.lengths.nrows(), sp_y.lengths.nrows(), kernel);
    Ok(kernel)
} // end of shortest_path_pair_attributes



/// Kernel matrix for attributed graphs, same orientation as
/// [compute_kernel_matrix](super::matrix::compute_kernel_matrix) : (ny, nx) with rows corresponding to graphs_y,
/// or (nx, nx) if graphs_y is None.  
/// Path matrices are computed once per graph, then each entry costs one [attributed_pair_kernel].
/// With params.parallel entries are computed in parallel.
pub fn shortest_path_attributes_matrix<G, K>(graphs_x : &[G], graphs_y : Option<&[G]>, params : &SpKernelParams, 
                attribute_kernel : &K) -> Result<Array2<f64>, KernelError> 
    where G : ShortestPathProvider + Sync,
          G::Label : Send + Sync,
          K : AttributeKernel + Sync + ?Sized {
    //
    let algorithm = params.get_algorithm();
    let build = |g : &G| g.build_shortest_path_matrix(algorithm, LabelMode::Attribute);
    let sp_x : Vec<SpMatrices<G::Label>> = if params.get_parallel() {
        graphs_x.par_iter().map(build).collect::<Result<Vec<_>, KernelError>>()?
    }
    else {
        graphs_x.iter().map(build).collect::<Result<Vec<_>, KernelError>>()?
    };
    let sp_y : Option<Vec<SpMatrices<G::Label>>> = match graphs_y {
        None => None,
        Some(graphs_y) => {
            if params.get_parallel() {
                Some(graphs_y.par_iter().map(build).collect::<Result<Vec<_>, KernelError>>()?)
            }
            else {
                Some(graphs_y.iter().map(build).collect::<Result<Vec<_>, KernelError>>()?)
            }
        }
    };
    let rows = sp_y.as_ref().unwrap_or(&sp_x);
    let (nb_rows, nb_cols) = (rows.len(), sp_x.len());
    log::debug!("shortest_path_attributes_matrix shape ({}, {})", nb_rows, nb_cols);
    // entry (r, c) is kernel between x_c and row graph r
    let entry = |flat : usize| -> Result<f64, KernelError> {
        let (r, c) = (flat / nb_cols, flat % nb_cols);
        let (sx, sy) = (&sp_x[c], &rows[r]);
        attributed_pair_kernel(&sx.lengths, get_attributes(sx)?, &sy.lengths, get_attributes(sy)?, attribute_kernel)
    };
    let values = if params.get_parallel() {
        (0..nb_rows * nb_cols).into_par_iter().map(entry).collect::<Result<Vec<f64>, KernelError>>()?
    }
    else {
        (0..nb_rows * nb_cols).map(entry).collect::<Result<Vec<f64>, KernelError>>()?
    };
    Ok(Array2::from_shape_fn((nb_rows, nb_cols), |(r, c)| values[r * nb_cols + c]))
} // end of shortest_path_attributes_matrix



// end of mod tests
