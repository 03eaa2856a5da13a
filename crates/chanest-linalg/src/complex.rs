use crate::error::LinalgError;
use crate::CMat;

pub use faer::complex_native::c64;

/// Create a complex matrix from a row-major buffer.
///
/// # Arguments
///
/// * `rows` - The number of rows.
/// * `cols` - The number of columns.
/// * `data` - The matrix entries in row-major order with length `rows * cols`.
///
/// # Errors
///
/// Returns [`LinalgError::InvalidLength`] if the buffer length does not match the shape.
///
/// # Example
///
/// ```
/// use chanest_linalg::{c64, from_row_major};
///
/// let m = from_row_major(1, 2, &[c64::new(1.0, 0.0), c64::new(0.0, 1.0)]).unwrap();
/// assert_eq!(m.read(0, 1), c64::new(0.0, 1.0));
/// ```
pub fn from_row_major(rows: usize, cols: usize, data: &[c64]) -> Result<CMat, LinalgError> {
    if data.len() != rows * cols {
        return Err(LinalgError::InvalidLength(data.len(), rows, cols));
    }
    Ok(CMat::from_fn(rows, cols, |i, j| data[i * cols + j]))
}

/// Create a complex matrix with zero imaginary part from a real row-major buffer.
///
/// # Errors
///
/// Returns [`LinalgError::InvalidLength`] if the buffer length does not match the shape.
pub fn from_real_row_major(
    rows: usize,
    cols: usize,
    data: &[f64],
) -> Result<CMat, LinalgError> {
    if data.len() != rows * cols {
        return Err(LinalgError::InvalidLength(data.len(), rows, cols));
    }
    Ok(CMat::from_fn(rows, cols, |i, j| c64::new(data[i * cols + j], 0.0)))
}

/// The `n x n` complex identity matrix.
pub fn identity(n: usize) -> CMat {
    CMat::identity(n, n)
}
