//! Path features and their enumeration.
//!
//! A path feature is the length of a shortest path between an ordered pair of distinct vertices,
//! possibly together with the labels of its two extremities.
//! The [FeatureEnumeration] gives each distinct feature met in a batch of graphs a column index,
//! in first seen order. It is shared by all graphs of a batch so that their [FeatureHistogram]
//! live in the same coordinate space.
//! 

use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use indexmap::IndexSet;

use crate::errors::KernelError;
use crate::graph::pgraph::LabelT;
use crate::graph::paths::PathLengthMatrix;


/// A path length usable as a hash key.  
/// Equality is exact equality of the f64 values (with 0. and -0. identified): lengths
/// must be computed consistently (integer edge counts or identical float accumulation).
#[derive(Debug, Copy, Clone)]
pub struct PathLength(f64);

impl PathLength {
    pub fn new(length : f64) -> Self {
        // -0. and 0. have different bits
        if length == 0. {
            PathLength(0.)
        }
        else {
            PathLength(length)
        }
    }

    ///
    pub fn get_value(&self) -> f64 { self.0 }
} // end of impl PathLength


impl PartialEq for PathLength {
    fn eq(&self, other : &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for PathLength {}

impl Hash for PathLength {
    fn hash<H : Hasher>(&self, state : &mut H) {
        self.0.to_bits().hash(state);
    }
}


/// The unit of histograms.  
/// (a, b, d) and (b, a, d) are distinct features.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathFeature<L> {
    /// path length alone
    Length(PathLength),
    /// (label of source, label of target, path length)
    LabeledLength(L, L, PathLength),
} // end of enum PathFeature


//===================================================================================


/// sparse histogram of a graph : feature index -> number of occurrences
#[derive(Debug, Clone, Default)]
pub struct FeatureHistogram {
    counts : HashMap<usize, usize, ahash::RandomState>,
}


impl FeatureHistogram {

    pub fn new() -> Self {
        FeatureHistogram{counts : HashMap::<usize, usize, ahash::RandomState>::default()}
    }

    /// increment count of feature idx
    pub(crate) fn increment(&mut self, idx : usize) {
        *self.counts.entry(idx).or_insert(0) += 1;
    }

    /// number of occurrences of feature of index idx
    pub fn get_count(&self, idx : usize) -> usize {
        self.counts.get(&idx).copied().unwrap_or(0)
    }

    /// number of distinct features present
    pub fn nb_features(&self) -> usize {
        self.counts.len()
    }

    /// total number of feature occurrences, i.e number of ordered pairs joined by a path
    pub fn total_count(&self) -> usize {
        self.counts.values().sum()
    }

    /// iterates on (feature index, count), no specific order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts.iter().map(|(idx, count)| (*idx, *count))
    }

    /// inner product with another histogram expressed in the same enumeration
    pub fn dot(&self, other : &FeatureHistogram) -> f64 {
        let (small, large) = if self.nb_features() <= other.nb_features() { (self, other) } else { (other, self) };
        small.iter().map(|(idx, count)| (count * large.get_count(idx)) as f64).sum()
    }

} // end of impl FeatureHistogram


//===================================================================================


/// Append only map from path features to column index.  
/// Index are given in first seen order, are never reused and are stable during one kernel computation.
pub struct FeatureEnumeration<L> 
    where L : LabelT {
    features : IndexSet<PathFeature<L>, ahash::RandomState>,
} // end of struct FeatureEnumeration


impl <L> FeatureEnumeration<L> 
    where L : LabelT {

    pub fn new() -> Self {
        FeatureEnumeration{features : IndexSet::with_hasher(ahash::RandomState::new())}
    }

    /// number of distinct features enumerated
    pub fn len(&self) -> usize {
        self.features.len()
    }

    ///
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// index of feature if already enumerated
    pub fn get_index(&self, feature : &PathFeature<L>) -> Option<usize> {
        self.features.get_index_of(feature)
    }

    /// feature at column idx
    pub fn get_feature(&self, idx : usize) -> Option<&PathFeature<L>> {
        self.features.get_index(idx)
    }

    /// returns index of feature, appending it if not yet enumerated
    pub fn index_or_insert(&mut self, feature : PathFeature<L>) -> usize {
        self.features.insert_full(feature).0
    }


    /// Builds histogram of a graph from its path length matrix and, if given, its vertex labels.   
    /// All ordered pairs (u,v) with u != v and a finite length contribute one occurrence.
    /// New features are appended to the enumeration.
    pub fn encode(&mut self, lengths : &PathLengthMatrix, labels : Option<&[L]>) -> Result<FeatureHistogram, KernelError> {
        let (nb_rows, nb_cols) = lengths.dim();
        if nb_rows != nb_cols {
            log::error!("FeatureEnumeration::encode non square path matrix ({}, {})", nb_rows, nb_cols);
            return Err(KernelError::DimensionMismatch{expected : nb_rows, got : nb_cols});
        }
        if let Some(labels) = labels {
            if labels.len() != nb_rows {
                log::error!("FeatureEnumeration::encode got {} labels for {} vertices", labels.len(), nb_rows);
                return Err(KernelError::DimensionMismatch{expected : nb_rows, got : labels.len()});
            }
        }
        //
        let mut histogram = FeatureHistogram::new();
        for ((u, v), length) in lengths.indexed_iter() {
            if u == v || length.is_infinite() {
                continue;
            }
            let length = PathLength::new(*length);
            let feature = match labels {
                Some(labels) => PathFeature::LabeledLength(labels[u].clone(), labels[v].clone(), length),
                None         => PathFeature::Length(length),
            };
            let idx = self.index_or_insert(feature);
            histogram.increment(idx);
        }
        log::trace!("encode nb vertices {} distinct features {} , enumeration size {}", nb_rows, histogram.nb_features(), self.len());
        Ok(histogram)
    } // end of encode

} // end of impl FeatureEnumeration


impl <L> Default for FeatureEnumeration<L> 
    where L : LabelT {
    fn default() -> Self {
        FeatureEnumeration::new()
    }
}



// end of mod tests
