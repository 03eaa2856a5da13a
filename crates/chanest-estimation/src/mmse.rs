use chanest_linalg::{
    adjoint, identity, inverse, kron, scale, scale_real, transpose, vec_col_major, CMat,
};

use crate::batch::estimate_batch;
use crate::error::EstimationError;
use crate::pilots::{check_pilot_count, Pilots};

/// Check that the covariance matrix is `num_rx x num_rx`.
pub(crate) fn check_covariance(c: &CMat, num_rx: usize) -> Result<(), EstimationError> {
    if c.nrows() != num_rx || c.ncols() != num_rx {
        return Err(EstimationError::CovarianceShapeMismatch(
            num_rx,
            c.nrows(),
            c.ncols(),
        ));
    }
    Ok(())
}

/// Check that a pilot sequence carries a single transmit stream.
fn check_single_stream(s: &CMat) -> Result<(), EstimationError> {
    if s.nrows() != 1 {
        return Err(EstimationError::MultipleTransmitStreams(s.nrows()));
    }
    Ok(())
}

/// Estimate the channel of a single SIMO realization with the MMSE estimator.
///
/// The received block is linearised as `vec(Y_p) = S h + n` with `S = s^T ⊗ I_Nr`, and
/// the estimate is
///
/// $ \hat{h} = (\sigma^2 I + C)^{-1} C S^H vec(Y_p) / (s s^H) $
///
/// where `σ²` is `noise_power`.
///
/// # Arguments
///
/// * `y_p` - The received pilot symbols with shape (Nr, num_pilots).
/// * `s` - The transmitted pilots with shape (1, num_pilots).
/// * `noise_power` - The noise power.
/// * `c` - The receive antenna channel covariance matrix with shape (Nr, Nr).
///
/// # Returns
///
/// The estimated channel with shape (Nr, 1).
///
/// # Errors
///
/// * [`EstimationError::MultipleTransmitStreams`] if `s` has more than one row.
/// * [`EstimationError::PilotCountMismatch`] if `y_p` and `s` span a different number of pilots.
/// * [`EstimationError::CovarianceShapeMismatch`] if `c` is not (Nr, Nr).
/// * [`EstimationError::Linalg`] if `noise_power * I + C` is singular or the pilots carry no energy.
pub fn mmse_estimate_single(
    y_p: &CMat,
    s: &CMat,
    noise_power: f64,
    c: &CMat,
) -> Result<CMat, EstimationError> {
    check_single_stream(s)?;
    check_pilot_count(y_p, s)?;

    let num_rx = y_p.nrows();
    check_covariance(c, num_rx)?;

    let eye = identity(num_rx);
    let y_vec = vec_col_major(y_p);
    let s_big = kron(&transpose(s), &eye);

    // s s^H is 1x1 since there is a single transmit stream
    let energy_inv = inverse(&(s * &adjoint(s)))?;
    let regularized_inv = inverse(&(&scale_real(&eye, noise_power) + c))?;

    let h = &(&(&regularized_inv * c) * &adjoint(&s_big)) * &y_vec;

    Ok(scale(&h, energy_inv.read(0, 0)))
}

/// Estimate the channels of a batch of SIMO realizations with the MMSE estimator.
///
/// The covariance matrix and noise power are shared by all realizations, which are
/// processed in parallel and independently.
///
/// # Arguments
///
/// * `y_p` - The received pilot symbols, one (Nr, num_pilots) matrix per realization.
/// * `pilots` - The transmitted pilots with shape (1, num_pilots), shared or one per realization.
/// * `noise_power` - The noise power.
/// * `c` - The receive antenna channel covariance matrix with shape (Nr, Nr).
///
/// # Returns
///
/// One (Nr, 1) channel estimate per realization, in input order.
///
/// # Errors
///
/// * [`EstimationError::MultipleTransmitStreams`] if any pilot sequence has more than one row,
///   checked before any realization is processed.
/// * [`EstimationError::RealizationCountMismatch`] if per-realization pilots do not match the batch size.
/// * [`EstimationError::ShapeMismatch`] if the realizations differ in receive antennas.
/// * Any error of [`mmse_estimate_single`] raised by a realization.
pub fn mmse_estimate_batch(
    y_p: &[CMat],
    pilots: Pilots<'_>,
    noise_power: f64,
    c: &CMat,
) -> Result<Vec<CMat>, EstimationError> {
    pilots.sequences().try_for_each(check_single_stream)?;

    estimate_batch(y_p, pilots, |y_i, s_i| {
        mmse_estimate_single(y_i, s_i, noise_power, c)
    })
}
