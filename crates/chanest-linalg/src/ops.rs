use crate::complex::c64;
use crate::error::LinalgError;
use crate::CMat;

/// Compute the conjugate (Hermitian) transpose of a matrix.
///
/// # Arguments
///
/// * `a` - The input matrix with shape (r, c).
///
/// # Returns
///
/// A new matrix with shape (c, r) where `out[j][i] = conj(a[i][j])`.
pub fn adjoint(a: &CMat) -> CMat {
    a.adjoint().to_owned()
}

/// Compute the plain transpose of a matrix, without conjugation.
pub fn transpose(a: &CMat) -> CMat {
    a.transpose().to_owned()
}

/// Multiply every entry of a matrix by a complex scalar.
pub fn scale(a: &CMat, k: c64) -> CMat {
    faer::scale(k) * a
}

/// Multiply every entry of a matrix by a real scalar.
pub fn scale_real(a: &CMat, k: f64) -> CMat {
    scale(a, c64::new(k, 0.0))
}

/// Compute the Kronecker product of two matrices.
///
/// The output has shape `(ra * rb, ca * cb)` and is made of the blocks `a[i][j] * b`.
///
/// # Arguments
///
/// * `a` - The left matrix with shape (ra, ca).
/// * `b` - The right matrix with shape (rb, cb).
///
/// # Example
///
/// ```
/// use chanest_linalg::{from_real_row_major, identity, kron};
///
/// let s_t = from_real_row_major(2, 1, &[1.0, -1.0]).unwrap();
/// let k = kron(&s_t, &identity(2));
/// assert_eq!((k.nrows(), k.ncols()), (4, 2));
/// ```
pub fn kron(a: &CMat, b: &CMat) -> CMat {
    a.kron(b)
}

/// Stack the columns of a matrix into a single column vector.
///
/// The output has shape `(r * c, 1)` and entry `k` maps to `a[k % r][k / r]`.
pub fn vec_col_major(a: &CMat) -> CMat {
    let rows = a.nrows();
    CMat::from_fn(rows * a.ncols(), 1, |k, _| a.read(k % rows, k / rows))
}

/// Compute the trace of a square matrix.
///
/// # Errors
///
/// Returns [`LinalgError::NotSquare`] if the matrix is not square.
pub fn trace(a: &CMat) -> Result<c64, LinalgError> {
    if a.nrows() != a.ncols() {
        return Err(LinalgError::NotSquare(a.nrows(), a.ncols()));
    }
    Ok(a.diagonal().column_vector().sum())
}

/// Compute the squared Frobenius norm `sum |a_ij|^2` of a matrix.
pub fn frobenius_norm_sqr(a: &CMat) -> f64 {
    a.squared_norm_l2()
}
