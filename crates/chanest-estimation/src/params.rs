use chanest_linalg::CMat;
use serde::{Deserialize, Serialize};

use crate::error::EstimationError;
use crate::mse::{ls_theoretical_mse, mmse_theoretical_mse};

/// Scalar parameters of a pilot-based SIMO link.
///
/// The received pilots follow `Y_p = alpha * h * s + N`, where each pilot carries
/// `pilot_power` and the noise has power `noise_power` per sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinkParams {
    /// Number of receive antennas.
    pub num_rx: usize,
    /// Noise power per received sample.
    pub noise_power: f64,
    /// Linear path loss.
    pub alpha: f64,
    /// Power of each transmitted pilot symbol.
    pub pilot_power: f64,
    /// Number of pilots in the estimation window.
    pub num_pilots: usize,
}

impl Default for LinkParams {
    fn default() -> Self {
        Self {
            num_rx: 2,
            noise_power: 0.1,
            alpha: 1.0,
            pilot_power: 1.0,
            num_pilots: 10,
        }
    }
}

impl LinkParams {
    /// Check that the parameters describe a valid link.
    ///
    /// # Errors
    ///
    /// Returns [`EstimationError::InvalidParameter`] naming the first offending field.
    pub fn validate(&self) -> Result<(), EstimationError> {
        if self.num_rx == 0 {
            return Err(invalid("num_rx", "must be at least 1"));
        }
        if self.num_pilots == 0 {
            return Err(invalid("num_pilots", "must be at least 1"));
        }
        if !self.noise_power.is_finite() || self.noise_power < 0.0 {
            return Err(invalid("noise_power", "must be finite and non-negative"));
        }
        if !self.alpha.is_finite() || self.alpha <= 0.0 {
            return Err(invalid("alpha", "must be finite and positive"));
        }
        if !self.pilot_power.is_finite() || self.pilot_power <= 0.0 {
            return Err(invalid("pilot_power", "must be finite and positive"));
        }
        Ok(())
    }

    /// Received pilot SNR `alpha^2 * pilot_power / noise_power` in decibels.
    pub fn snr_db(&self) -> f64 {
        10.0 * (self.alpha.powi(2) * self.pilot_power / self.noise_power).log10()
    }

    /// Return a copy whose noise power yields the given received pilot SNR.
    pub fn with_snr_db(self, snr_db: f64) -> Self {
        Self {
            noise_power: self.alpha.powi(2) * self.pilot_power / 10f64.powf(snr_db / 10.0),
            ..self
        }
    }

    /// Noise power per antenna after combining the pilot window and removing the path loss.
    ///
    /// This is the `noise_power` to pass to the MMSE estimator when the received block is
    /// divided by `alpha`, so that its error matches [`LinkParams::mmse_theoretical_mse`].
    pub fn combined_noise_power(&self) -> f64 {
        self.noise_power / (self.alpha.powi(2) * self.pilot_power * self.num_pilots as f64)
    }

    /// Theoretical MSE of the LS estimator for this link.
    pub fn ls_theoretical_mse(&self) -> f64 {
        ls_theoretical_mse(
            self.num_rx,
            self.noise_power,
            self.alpha,
            self.pilot_power,
            self.num_pilots,
        )
    }

    /// Theoretical MSE of the MMSE estimator for this link.
    ///
    /// # Errors
    ///
    /// Same as [`crate::mmse_theoretical_mse`].
    pub fn mmse_theoretical_mse(&self, c: &CMat) -> Result<f64, EstimationError> {
        mmse_theoretical_mse(
            self.num_rx,
            self.noise_power,
            self.alpha,
            self.pilot_power,
            self.num_pilots,
            c,
        )
    }
}

fn invalid(name: &'static str, reason: &str) -> EstimationError {
    EstimationError::InvalidParameter(name, reason.to_string())
}
