use chanest_linalg::{adjoint, inverse, CMat};

use crate::batch::estimate_batch;
use crate::error::EstimationError;
use crate::pilots::{check_pilot_count, Pilots};

/// Estimate the channel of a single realization with the least-squares estimator.
///
/// The channel is assumed constant over the pilot window, `Y_p = H s + N`, and the
/// estimate is `Y_p s^H (s s^H)^-1`.
///
/// # Arguments
///
/// * `y_p` - The received pilot symbols with shape (Nr, num_pilots).
/// * `s` - The transmitted pilots with shape (Nt, num_pilots).
///
/// # Returns
///
/// The estimated channel with shape (Nr, Nt).
///
/// # Errors
///
/// * [`EstimationError::PilotCountMismatch`] if `y_p` and `s` span a different number of pilots.
/// * [`EstimationError::Linalg`] if `s s^H` is singular, i.e. the pilot rows are linearly dependent.
///
/// # Example
///
/// ```
/// use chanest_linalg::from_real_row_major;
/// use chanest_estimation::ls_estimate_single;
///
/// let s = from_real_row_major(1, 4, &[1.0, 1.0, 1.0, 1.0]).unwrap();
/// let y_p = from_real_row_major(2, 4, &[2.0, 2.0, 2.0, 2.0, 3.0, 3.0, 3.0, 3.0]).unwrap();
/// let h = ls_estimate_single(&y_p, &s).unwrap();
/// assert_eq!((h.nrows(), h.ncols()), (2, 1));
/// ```
pub fn ls_estimate_single(y_p: &CMat, s: &CMat) -> Result<CMat, EstimationError> {
    check_pilot_count(y_p, s)?;

    let s_h = adjoint(s);
    let gram_inv = inverse(&(s * &s_h))?;

    Ok(&(y_p * &s_h) * &gram_inv)
}

/// Estimate the channels of a batch of realizations with the least-squares estimator.
///
/// Realizations are processed in parallel and independently.
///
/// # Arguments
///
/// * `y_p` - The received pilot symbols, one (Nr, num_pilots) matrix per realization.
/// * `pilots` - The transmitted pilots, shared or one sequence per realization.
///
/// # Returns
///
/// One (Nr, Nt) channel estimate per realization, in input order.
///
/// # Errors
///
/// * [`EstimationError::RealizationCountMismatch`] if per-realization pilots do not match the batch size.
/// * [`EstimationError::ShapeMismatch`] if the realizations differ in receive antennas or the
///   per-realization pilots differ in transmit streams.
/// * Any error of [`ls_estimate_single`] raised by a realization.
pub fn ls_estimate_batch(y_p: &[CMat], pilots: Pilots<'_>) -> Result<Vec<CMat>, EstimationError> {
    estimate_batch(y_p, pilots, ls_estimate_single)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chanest_linalg::{c64, from_real_row_major, from_row_major, LinalgError};

    fn assert_mat_eq(a: &CMat, b: &CMat, eps: f64) {
        assert_eq!((a.nrows(), a.ncols()), (b.nrows(), b.ncols()));
        for i in 0..a.nrows() {
            for j in 0..a.ncols() {
                assert_relative_eq!(a.read(i, j).re, b.read(i, j).re, epsilon = eps);
                assert_relative_eq!(a.read(i, j).im, b.read(i, j).im, epsilon = eps);
            }
        }
    }

    #[test]
    fn test_ls_unit_pilots() -> Result<(), EstimationError> {
        let s = from_real_row_major(1, 4, &[1.0, 1.0, 1.0, 1.0])?;
        let h = from_real_row_major(2, 1, &[2.0, 3.0])?;
        let y_p = &h * &s;

        let h_est = ls_estimate_single(&y_p, &s)?;
        assert_mat_eq(&h_est, &h, 1e-10);
        Ok(())
    }

    #[test]
    fn test_ls_mimo_reconstruction() -> Result<(), EstimationError> {
        // Nr = 3, Nt = 2, orthogonal-ish complex pilots
        let s = from_row_major(
            2,
            3,
            &[
                c64::new(1.0, 0.0),
                c64::new(0.0, 1.0),
                c64::new(-1.0, 0.0),
                c64::new(1.0, 0.0),
                c64::new(1.0, 0.0),
                c64::new(0.0, -1.0),
            ],
        )?;
        let h = from_row_major(
            3,
            2,
            &[
                c64::new(0.3, -0.1),
                c64::new(1.2, 0.4),
                c64::new(-0.7, 0.9),
                c64::new(0.0, 0.5),
                c64::new(2.0, 0.0),
                c64::new(-1.1, -0.2),
            ],
        )?;
        let y_p = &h * &s;

        let h_est = ls_estimate_single(&y_p, &s)?;
        assert_mat_eq(&h_est, &h, 1e-12);
        assert_mat_eq(&(&h_est * &s), &y_p, 1e-12);
        Ok(())
    }

    #[test]
    fn test_ls_dependent_pilots() -> Result<(), EstimationError> {
        // second pilot row is twice the first one
        let s = from_real_row_major(2, 3, &[1.0, -1.0, 1.0, 2.0, -2.0, 2.0])?;
        let y_p = from_real_row_major(2, 3, &[0.0; 6])?;
        assert!(matches!(
            ls_estimate_single(&y_p, &s),
            Err(EstimationError::Linalg(LinalgError::SingularMatrix(2)))
        ));
        Ok(())
    }

    #[test]
    fn test_ls_pilot_count_mismatch() -> Result<(), EstimationError> {
        let s = from_real_row_major(1, 4, &[1.0; 4])?;
        let y_p = from_real_row_major(2, 3, &[0.0; 6])?;
        assert!(matches!(
            ls_estimate_single(&y_p, &s),
            Err(EstimationError::PilotCountMismatch(3, 4))
        ));
        Ok(())
    }

    #[test]
    fn test_ls_batch_shared() -> Result<(), EstimationError> {
        let s = from_real_row_major(1, 2, &[1.0, -1.0])?;
        let y_p = vec![
            from_real_row_major(2, 2, &[1.0, -1.0, 2.0, -2.0])?,
            from_real_row_major(2, 2, &[-3.0, 3.0, 0.5, -0.5])?,
        ];

        let out = ls_estimate_batch(&y_p, Pilots::Shared(&s))?;
        assert_eq!(out.len(), 2);
        assert_mat_eq(&out[0], &from_real_row_major(2, 1, &[1.0, 2.0])?, 1e-12);
        assert_mat_eq(&out[1], &from_real_row_major(2, 1, &[-3.0, 0.5])?, 1e-12);
        Ok(())
    }

    #[test]
    fn test_ls_batch_realization_mismatch() -> Result<(), EstimationError> {
        let s = from_real_row_major(1, 2, &[1.0, -1.0])?;
        let seqs = vec![s.clone(), s.clone(), s];
        let y_p = vec![from_real_row_major(2, 2, &[0.0; 4])?; 2];
        assert!(matches!(
            ls_estimate_batch(&y_p, Pilots::PerRealization(&seqs)),
            Err(EstimationError::RealizationCountMismatch(2, 3))
        ));
        Ok(())
    }

    #[test]
    fn test_ls_batch_empty() -> Result<(), EstimationError> {
        let s = from_real_row_major(1, 2, &[1.0, -1.0])?;
        let out = ls_estimate_batch(&[], Pilots::Shared(&s))?;
        assert!(out.is_empty());
        Ok(())
    }

    #[test]
    fn test_ls_batch_ragged_receive_antennas() -> Result<(), EstimationError> {
        let s = from_real_row_major(1, 2, &[1.0, -1.0])?;
        let y_p = vec![
            from_real_row_major(2, 2, &[1.0, -1.0, 2.0, -2.0])?,
            from_real_row_major(3, 2, &[1.0, -1.0, 2.0, -2.0, 3.0, -3.0])?,
        ];
        assert!(matches!(
            ls_estimate_batch(&y_p, Pilots::Shared(&s)),
            Err(EstimationError::ShapeMismatch([2, 2], [3, 2]))
        ));
        Ok(())
    }

    #[test]
    fn test_ls_batch_ragged_transmit_streams() -> Result<(), EstimationError> {
        let seqs = vec![
            from_real_row_major(1, 3, &[1.0, 1.0, 1.0])?,
            from_real_row_major(2, 3, &[1.0, 0.0, 1.0, 0.0, 1.0, 1.0])?,
        ];
        let y_p = vec![from_real_row_major(2, 3, &[1.0; 6])?; 2];
        assert!(matches!(
            ls_estimate_batch(&y_p, Pilots::PerRealization(&seqs)),
            Err(EstimationError::ShapeMismatch([1, 3], [2, 3]))
        ));
        Ok(())
    }
}
