//! Kernel matrix of a batch (or two batches) of graphs by explicit feature vectors.
//!
//! Every graph is turned into a histogram of its path features, all histograms being expressed in
//! one [FeatureEnumeration] shared across the call. Histograms are kept sparse and only densified
//! when the feature matrices are assembled, the kernel matrix is then a matrix product.
//!
//! **Orientation of the result** : with graphs_x of size nx and graphs_y of size ny
//! the returned matrix has shape (ny, nx), **rows correspond to graphs_y and columns to graphs_x**.
//! Without graphs_y the matrix is the (nx, nx) symmetric Gram matrix of graphs_x.
//!

use std::time::SystemTime;
use cpu_time::ProcessTime;

use ndarray::Array2;
use sprs::{TriMatI, CsMatI};
use rayon::prelude::*;

use crate::errors::KernelError;
use crate::graph::pgraph::LabelT;
use crate::graph::provider::*;
use crate::spkernel::params::*;
use super::feature::*;


/// histograms of a batch and the enumeration they refer to
pub struct BatchHistograms<L> 
    where L : LabelT {
    pub enumeration : FeatureEnumeration<L>,
    /// one histogram by graph, in batch order
    pub histograms : Vec<FeatureHistogram>,
} // end of struct BatchHistograms



// the label mode of the histogram path, attributes are not handled here
fn histogram_label_mode(params : &SpKernelParams) -> LabelMode {
    if params.with_labels() { LabelMode::Vertex } else { LabelMode::None }
}


// encoding of one graph path matrices
fn encode_matrices<L>(enumeration : &mut FeatureEnumeration<L>, sp : &SpMatrices<L>, mode : LabelMode) -> Result<FeatureHistogram, KernelError> 
    where L : LabelT {
    let labels = match mode {
        LabelMode::Vertex => {
            let labels = sp.get_labels();
            if labels.is_none() {
                log::error!("graph returned no labels in vertex label mode");
                return Err(KernelError::DimensionMismatch{expected : sp.lengths.nrows(), got : 0});
            }
            labels
        }
        _ => None,
    };
    enumeration.encode(&sp.lengths, labels)
} // end of encode_matrices



/// Computes histograms of graphs taken in the order given, sharing one enumeration.  
/// In parallel mode path matrices are computed concurrently but encoding is done in one sequential
/// pass in batch order, so the enumeration does not depend on the parallel mode.
pub fn batch_histograms<G>(graphs : &[G], params : &SpKernelParams) -> Result<BatchHistograms<G::Label>, KernelError> 
    where G : ShortestPathProvider + Sync,
          G::Label : Send {
    //
    let mode = histogram_label_mode(params);
    let algorithm = params.get_algorithm();
    let mut enumeration = FeatureEnumeration::<G::Label>::new();
    let mut histograms = Vec::<FeatureHistogram>::with_capacity(graphs.len());
    //
    if params.get_parallel() {
        let matrices = graphs.par_iter()
                .map(|g| g.build_shortest_path_matrix(algorithm, mode))
                .collect::<Result<Vec<SpMatrices<G::Label>>, KernelError>>()?;
        for sp in &matrices {
            histograms.push(encode_matrices(&mut enumeration, sp, mode)?);
        }
    }
    else {
        // streaming, only one path matrix alive at a time
        for g in graphs {
            let sp = g.build_shortest_path_matrix(algorithm, mode)?;
            histograms.push(encode_matrices(&mut enumeration, &sp, mode)?);
        }
    }
    log::debug!("batch_histograms nb graphs {} , nb distinct features {}", graphs.len(), enumeration.len());
    Ok(BatchHistograms{enumeration, histograms})
} // end of batch_histograms



/// Dense feature matrix from histograms.  
/// If by_rows is true shape is (histograms.len(), nb_features) and row i is histogram i,
/// else shape is (nb_features, histograms.len()) and column i is histogram i.
pub fn feature_matrix(histograms : &[FeatureHistogram], nb_features : usize, by_rows : bool) -> Array2<f64> {
    let nb_graphs = histograms.len();
    let shape = if by_rows { (nb_graphs, nb_features) } else { (nb_features, nb_graphs) };
    let nnz = histograms.iter().map(|h| h.nb_features()).sum();
    let mut trimat = TriMatI::<f64, usize>::with_capacity(shape, nnz);
    for (i, histogram) in histograms.iter().enumerate() {
        for (j, count) in histogram.iter() {
            if by_rows {
                trimat.add_triplet(i, j, count as f64);
            }
            else {
                trimat.add_triplet(j, i, count as f64);
            }
        }
    }
    let csrmat : CsMatI<f64, usize> = trimat.to_csr();
    csrmat.to_dense()
} // end of feature_matrix



/// Computes the shortest path kernel matrix.  
/// 
/// - graphs_y = None : returns the (nx, nx) Gram matrix of graphs_x, entry (i,j) is the inner product of
///   histograms of graphs_x\[i\] and graphs_x\[j\].
/// - graphs_y = Some : returns a **(ny, nx)** matrix, entry (j,i) is the inner product of histograms of
///   graphs_y\[j\] and graphs_x\[i\].
///
/// Graphs are processed in order, graphs_x then graphs_y. An empty graphs_x without graphs_y gives a (0,0) matrix.  
/// params.as_attributes is not used here, see [shortest_path_attributes_matrix](super::attributed::shortest_path_attributes_matrix).
pub fn compute_kernel_matrix<G>(graphs_x : &[G], graphs_y : Option<&[G]>, params : &SpKernelParams) -> Result<Array2<f64>, KernelError> 
    where G : ShortestPathProvider + Sync,
          G::Label : Send {
    //
    let cpu_start = ProcessTime::now();
    let sys_now = SystemTime::now();
    //
    let nx = graphs_x.len();
    log::debug!("compute_kernel_matrix nx = {}, ny = {:?}, params : {:?}", nx, graphs_y.map(|g| g.len()), params);
    // histograms of x and y must share the enumeration so we encode the concatenation
    let batch = match graphs_y {
        None    => batch_histograms(graphs_x, params)?,
        Some(graphs_y) => {
            let all : Vec<&G> = graphs_x.iter().chain(graphs_y.iter()).collect();
            batch_histograms(&all, params)?
        }
    };
    let nb_features = batch.enumeration.len();
    let phi_x = feature_matrix(&batch.histograms[0..nx], nb_features, true);
    let kernel = match graphs_y {
        None => {
            phi_x.dot(&phi_x.t())
        }
        Some(_) => {
            let phi_y = feature_matrix(&batch.histograms[nx..], nb_features, false);
            phi_x.dot(&phi_y)
        }
    };
    // (nx, ny) -> (ny, nx)
    let kernel = kernel.reversed_axes();
    //
    log::debug!("compute_kernel_matrix shape {:?}, nb features {}, sys time(ms) {:?} cpu time(ms) {:?}", 
            kernel.dim(), nb_features, sys_now.elapsed().map(|d| d.as_millis()).unwrap_or(0), cpu_start.elapsed().as_millis());
    Ok(kernel)
} // end of compute_kernel_matrix



// end of mod tests
