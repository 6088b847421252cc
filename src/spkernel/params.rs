//! Kernel Parameters
//! 
//! The string flags accepted by the kernel entry points are resolved here, once, into
//! small enums so that inner loops never re-check them.
//! 

use std::str::FromStr;

use crate::errors::KernelError;

/// The all pairs shortest path algorithm asked to the graph.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    /// one dijkstra run per source vertex
    Dijkstra,
    ///
    FloydWarshall,
    /// let the graph choose according to its density
    Auto,
}


impl FromStr for Algorithm {
    type Err = KernelError;

    fn from_str(s : &str) -> Result<Self, Self::Err> {
        match s {
            "dijkstra"       => Ok(Algorithm::Dijkstra),
            "floyd_warshall" => Ok(Algorithm::FloydWarshall),
            "auto"           => Ok(Algorithm::Auto),
            _                => {
                log::error!("unsupported algorithm type : {}", s);
                Err(KernelError::UnsupportedAlgorithm(s.to_string()))
            }
        }
    }
} // end of impl FromStr for Algorithm


impl Default for Algorithm {
    fn default() -> Self { Algorithm::Dijkstra }
}


/// What a graph must return besides its path length matrix.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LabelMode {
    /// only path lengths
    None,
    /// one discrete label by vertex
    Vertex,
    /// one attribute vector by vertex
    Attribute,
}


#[derive(Debug, Copy, Clone)]
pub struct SpKernelParams {
    /// algorithm used for all pairs shortest paths
    pub algorithm : Algorithm,
    /// path features are (label(u), label(v), length) triples if true, bare lengths if false.
    /// Not used in attributed mode.
    pub with_labels : bool,
    /// vertex labels are continuous attributes : the O(n^4) pair kernel is used.
    pub as_attributes : bool,
    /// parallel computation of path matrices of a batch
    pub parallel : bool,
} // end of SpKernelParams


impl Default for SpKernelParams {
    fn default() -> Self {
        SpKernelParams{algorithm : Algorithm::Dijkstra, with_labels : true, as_attributes : false, parallel : false}
    }
}


impl SpKernelParams {

    pub fn new(algorithm : Algorithm, with_labels : bool, as_attributes : bool, parallel : bool) -> Self {
        SpKernelParams{algorithm, with_labels, as_attributes, parallel}
    }

    /// same as new but with algorithm given by its name : "dijkstra", "floyd_warshall" or "auto"
    pub fn from_str_algorithm(algorithm : &str, with_labels : bool, as_attributes : bool, parallel : bool) -> Result<Self, KernelError> {
        let algorithm = algorithm.parse::<Algorithm>()?;
        Ok(SpKernelParams::new(algorithm, with_labels, as_attributes, parallel))
    }

    /// 
    pub fn get_algorithm(&self) -> Algorithm { self.algorithm }

    ///
    pub fn with_labels(&self) -> bool { self.with_labels }

    ///
    pub fn as_attributes(&self) -> bool { self.as_attributes }

    ///
    pub fn get_parallel(&self) -> bool { self.parallel }

    /// The label mode to ask to graphs, attribute mode takes precedence over with_labels
    pub fn get_label_mode(&self) -> LabelMode {
        if self.as_attributes {
            LabelMode::Attribute
        }
        else if self.with_labels {
            LabelMode::Vertex
        }
        else {
            LabelMode::None
        }
    } // end of get_label_mode

    ///
    pub fn set_algorithm(&mut self, algorithm : Algorithm) { self.algorithm = algorithm}

    ///
    pub fn set_parallel(&mut self, parallel : bool) { self.parallel = parallel}

} // end of impl SpKernelParams



// end of mod tests
