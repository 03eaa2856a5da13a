#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the linear algebra helpers.
pub mod error;

/// Construction of complex matrices from flat buffers.
pub mod complex;

/// Matrix inversion with singularity detection.
pub mod inverse;

/// Structural matrix operations: adjoint, Kronecker product, vectorisation, trace.
pub mod ops;

pub use complex::{c64, from_real_row_major, from_row_major, identity};
pub use error::LinalgError;
pub use inverse::inverse;
pub use ops::{adjoint, frobenius_norm_sqr, kron, scale, scale_real, trace, transpose, vec_col_major};

/// Dense complex matrix used throughout the workspace.
pub type CMat = faer::Mat<c64>;
