//! To ease access to most frequently items
//! 

pub use crate::errors::KernelError;

pub use crate::graph::pgraph::*;
pub use crate::graph::provider::*;
pub use crate::graph::paths::PathLengthMatrix;

pub use crate::spkernel::params::*;
pub use crate::spkernel::feature::*;
pub use crate::spkernel::matrix::compute_kernel_matrix;
pub use crate::spkernel::attributed::*;
pub use crate::spkernel::kernel::*;
