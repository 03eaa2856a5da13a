use chanest_linalg::{identity, inverse, scale_real, trace, CMat};

use crate::error::EstimationError;
use crate::mmse::check_covariance;

/// Compute the theoretical MSE of the least-squares channel estimator.
///
/// The MSE is defined as:
///
/// $ MSE = \frac{N_r \sigma^2}{\alpha^2 P N_p} $
///
/// where `σ²` is the noise power, `α` the linear path loss, `P` the pilot power and
/// `N_p` the number of pilots. Zero denominators follow IEEE float semantics.
///
/// # Arguments
///
/// * `num_rx` - The number of receive antennas.
/// * `noise_power` - The noise power.
/// * `alpha` - The linear path loss.
/// * `pilot_power` - The pilot power.
/// * `num_pilots` - The number of pilots.
///
/// # Example
///
/// ```
/// use chanest_estimation::ls_theoretical_mse;
///
/// let mse = ls_theoretical_mse(1, 0.1, 1.0, 1.0, 10);
/// assert!((mse - 0.01).abs() < 1e-15);
/// ```
pub fn ls_theoretical_mse(
    num_rx: usize,
    noise_power: f64,
    alpha: f64,
    pilot_power: f64,
    num_pilots: usize,
) -> f64 {
    num_rx as f64 * noise_power / (alpha.powi(2) * pilot_power * num_pilots as f64)
}

/// Compute the theoretical MSE of the MMSE channel estimator.
///
/// The MSE is defined as:
///
/// $ MSE = tr\left( C \left( I + \frac{\alpha^2 P N_p}{\sigma^2} C \right)^{-1} \right) $
///
/// # Arguments
///
/// * `num_rx` - The number of receive antennas.
/// * `noise_power` - The noise power.
/// * `alpha` - The linear path loss.
/// * `pilot_power` - The pilot power.
/// * `num_pilots` - The number of pilots.
/// * `c` - The receive antenna channel covariance matrix with shape (Nr, Nr).
///
/// # Returns
///
/// The real part of the trace, which is the MSE for a Hermitian `c`.
///
/// # Errors
///
/// * [`EstimationError::CovarianceShapeMismatch`] if `c` is not (Nr, Nr).
/// * [`EstimationError::Linalg`] if the inner matrix is singular.
pub fn mmse_theoretical_mse(
    num_rx: usize,
    noise_power: f64,
    alpha: f64,
    pilot_power: f64,
    num_pilots: usize,
    c: &CMat,
) -> Result<f64, EstimationError> {
    check_covariance(c, num_rx)?;

    let k = alpha.powi(2) * pilot_power * num_pilots as f64 / noise_power;
    let inner_inv = inverse(&(&identity(num_rx) + &scale_real(c, k)))?;

    Ok(trace(&(c * &inner_inv))?.re)
}
