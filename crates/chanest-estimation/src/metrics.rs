use chanest_linalg::{frobenius_norm_sqr, CMat};

use crate::error::EstimationError;

fn check_pairs(estimates: &[CMat], channels: &[CMat]) -> Result<(), EstimationError> {
    if estimates.len() != channels.len() {
        return Err(EstimationError::RealizationCountMismatch(
            channels.len(),
            estimates.len(),
        ));
    }
    if estimates.is_empty() {
        return Err(EstimationError::EmptyBatch);
    }
    for (h_est, h) in estimates.iter().zip(channels.iter()) {
        if h_est.nrows() != h.nrows() || h_est.ncols() != h.ncols() {
            return Err(EstimationError::ShapeMismatch(
                [h_est.nrows(), h_est.ncols()],
                [h.nrows(), h.ncols()],
            ));
        }
    }
    Ok(())
}

/// Compute the empirical mean squared error between estimated and true channels.
///
/// The MSE is defined as:
///
/// $ MSE = \frac{1}{R} \sum_{i=1}^{R} \| \hat{H}_i - H_i \|_F^2 $
///
/// where `R` is the number of realizations. The error is summed over antennas and
/// averaged over realizations, which makes it comparable with
/// [`crate::ls_theoretical_mse`] and [`crate::mmse_theoretical_mse`].
///
/// # Arguments
///
/// * `estimates` - The estimated channels, one per realization.
/// * `channels` - The true channels, one per realization.
///
/// # Errors
///
/// * [`EstimationError::RealizationCountMismatch`] if the slices differ in length.
/// * [`EstimationError::EmptyBatch`] if there are no realizations.
/// * [`EstimationError::ShapeMismatch`] if an estimate and its channel differ in shape.
pub fn empirical_mse(estimates: &[CMat], channels: &[CMat]) -> Result<f64, EstimationError> {
    check_pairs(estimates, channels)?;

    let total = estimates
        .iter()
        .zip(channels.iter())
        .map(|(h_est, h)| frobenius_norm_sqr(&(h_est - h)))
        .sum::<f64>();

    Ok(total / estimates.len() as f64)
}

/// Compute the normalized MSE `sum ||H_est - H||^2 / sum ||H||^2`.
///
/// # Errors
///
/// Same as [`empirical_mse`].
pub fn normalized_mse(estimates: &[CMat], channels: &[CMat]) -> Result<f64, EstimationError> {
    check_pairs(estimates, channels)?;

    let (err, energy) = estimates.iter().zip(channels.iter()).fold(
        (0.0, 0.0),
        |(err, energy), (h_est, h)| {
            (
                err + frobenius_norm_sqr(&(h_est - h)),
                energy + frobenius_norm_sqr(h),
            )
        },
    );

    Ok(err / energy)
}

/// Convert a linear power ratio to decibels.
pub fn to_db(x: f64) -> f64 {
    10.0 * x.log10()
}
