#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for channel estimation.
pub mod error;

/// Pilot sequences shared by a batch or given per realization.
pub mod pilots;

/// Parallel evaluation of an estimator over many channel realizations.
mod batch;

/// Least-squares channel estimator.
pub mod ls;

/// Minimum-mean-square-error channel estimator.
///
/// Restricted to a single transmit stream (SIMO links).
pub mod mmse;

/// Closed-form theoretical MSE of the LS and MMSE estimators.
pub mod mse;

/// Empirical error metrics between estimated and true channels.
pub mod metrics;

/// Serialisable link parameters.
pub mod params;

pub use error::EstimationError;
pub use ls::{ls_estimate_batch, ls_estimate_single};
pub use metrics::{empirical_mse, normalized_mse, to_db};
pub use mmse::{mmse_estimate_batch, mmse_estimate_single};
pub use mse::{ls_theoretical_mse, mmse_theoretical_mse};
pub use params::LinkParams;
pub use pilots::Pilots;
