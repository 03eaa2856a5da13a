use faer::prelude::SolverCore;

use crate::complex::c64;
use crate::error::LinalgError;
use crate::CMat;

/// Invert a square complex matrix through its LU decomposition with partial pivoting.
///
/// The matrix is singular when a diagonal entry of the `U` factor is exactly zero or not
/// finite. Badly scaled but invertible matrices are accepted.
///
/// # Arguments
///
/// * `a` - The matrix to invert with shape (n, n).
///
/// # Returns
///
/// The inverse matrix with shape (n, n).
///
/// # Errors
///
/// * [`LinalgError::NotSquare`] if the matrix is not square.
/// * [`LinalgError::SingularMatrix`] if the matrix is singular.
///
/// # Example
///
/// ```
/// use chanest_linalg::{c64, from_real_row_major, inverse};
///
/// let a = from_real_row_major(2, 2, &[2.0, 0.0, 0.0, 4.0]).unwrap();
/// let a_inv = inverse(&a).unwrap();
/// assert_eq!(a_inv.read(1, 1), c64::new(0.25, 0.0));
/// ```
pub fn inverse(a: &CMat) -> Result<CMat, LinalgError> {
    let n = a.nrows();
    if n != a.ncols() {
        return Err(LinalgError::NotSquare(n, a.ncols()));
    }

    let lu = a.partial_piv_lu();
    let u = lu.compute_u();
    for i in 0..n {
        let pivot = u.read(i, i);
        if is_singular_pivot(pivot) {
            log::trace!("pivot {pivot:?} at column {i} of a {n}x{n} matrix");
            return Err(LinalgError::SingularMatrix(n));
        }
    }

    Ok(lu.inverse())
}

#[inline]
fn is_singular_pivot(pivot: c64) -> bool {
    !(pivot.re.is_finite() && pivot.im.is_finite()) || (pivot.re == 0.0 && pivot.im == 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex::{from_real_row_major, from_row_major, identity};
    use approx::assert_relative_eq;

    fn assert_identity(m: &CMat, eps: f64) {
        let eye = identity(m.nrows());
        for i in 0..m.nrows() {
            for j in 0..m.ncols() {
                assert_relative_eq!(m.read(i, j).re, eye.read(i, j).re, epsilon = eps);
                assert_relative_eq!(m.read(i, j).im, eye.read(i, j).im, epsilon = eps);
            }
        }
    }

    #[test]
    fn test_inverse_complex() -> Result<(), LinalgError> {
        let a = from_row_major(
            3,
            3,
            &[
                c64::new(2.0, 1.0),
                c64::new(0.5, 0.0),
                c64::new(0.0, -1.0),
                c64::new(1.0, 0.0),
                c64::new(3.0, -2.0),
                c64::new(0.25, 0.5),
                c64::new(0.0, 2.0),
                c64::new(1.0, 1.0),
                c64::new(4.0, 0.0),
            ],
        )?;
        let a_inv = inverse(&a)?;
        assert_identity(&(&a * &a_inv), 1e-12);
        assert_identity(&(&a_inv * &a), 1e-12);
        Ok(())
    }

    #[test]
    fn test_inverse_needs_pivoting() -> Result<(), LinalgError> {
        // zero on the leading diagonal entry
        let a = from_real_row_major(2, 2, &[0.0, 1.0, 1.0, 0.0])?;
        let a_inv = inverse(&a)?;
        assert_identity(&(&a * &a_inv), 1e-15);
        Ok(())
    }

    #[test]
    fn test_inverse_singular() -> Result<(), LinalgError> {
        let a = from_real_row_major(2, 2, &[1.0, 2.0, 2.0, 4.0])?;
        assert!(matches!(inverse(&a), Err(LinalgError::SingularMatrix(2))));

        let zeros = from_real_row_major(1, 1, &[0.0])?;
        assert!(matches!(inverse(&zeros), Err(LinalgError::SingularMatrix(1))));

        let nan = from_real_row_major(1, 1, &[f64::NAN])?;
        assert!(matches!(inverse(&nan), Err(LinalgError::SingularMatrix(1))));
        Ok(())
    }

    #[test]
    fn test_inverse_not_square() -> Result<(), LinalgError> {
        let a = from_real_row_major(2, 3, &[1.0; 6])?;
        assert!(matches!(inverse(&a), Err(LinalgError::NotSquare(2, 3))));
        Ok(())
    }

    #[test]
    fn test_inverse_scaled_matrix() -> Result<(), LinalgError> {
        let a = from_real_row_major(2, 2, &[1e-8, 0.0, 0.0, 2e-8])?;
        let a_inv = inverse(&a)?;
        assert_relative_eq!(a_inv.read(0, 0).re, 1e8, max_relative = 1e-12);
        assert_relative_eq!(a_inv.read(1, 1).re, 0.5e8, max_relative = 1e-12);
        Ok(())
    }

    #[test]
    fn test_inverse_widely_scaled_diagonal() -> Result<(), LinalgError> {
        // exactly invertible even though the entries span 17 orders of magnitude
        let a = from_real_row_major(2, 2, &[1.0, 0.0, 0.0, 1e-17])?;
        let a_inv = inverse(&a)?;
        assert_relative_eq!(a_inv.read(0, 0).re, 1.0, max_relative = 1e-12);
        assert_relative_eq!(a_inv.read(1, 1).re, 1e17, max_relative = 1e-12);
        assert_eq!(a_inv.read(0, 1), c64::new(0.0, 0.0));
        Ok(())
    }
}
