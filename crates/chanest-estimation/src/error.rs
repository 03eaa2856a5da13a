use chanest_linalg::LinalgError;

/// An error type for channel estimation.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum EstimationError {
    /// The received signal and the pilot sequence disagree on the number of pilots.
    #[error("Received signal spans {0} pilot slots but the pilot sequence has {1}")]
    PilotCountMismatch(usize, usize),

    /// The number of per-realization inputs does not match the batch size.
    #[error("Expected {0} realizations, got {1}")]
    RealizationCountMismatch(usize, usize),

    /// The MMSE estimator only supports a single transmit stream.
    #[error("MMSE estimation requires a single transmit stream, got {0}")]
    MultipleTransmitStreams(usize),

    /// The channel covariance matrix is not `Nr x Nr`.
    #[error("Covariance matrix must be {0}x{0}, got {1}x{2}")]
    CovarianceShapeMismatch(usize, usize, usize),

    /// Two matrices that are compared element-wise differ in shape.
    #[error("Shape mismatch: {0:?} != {1:?}")]
    ShapeMismatch([usize; 2], [usize; 2]),

    /// An empirical metric was requested over zero realizations.
    #[error("Cannot compute a metric over an empty batch")]
    EmptyBatch,

    /// A link parameter is outside its valid range.
    #[error("Invalid link parameter `{0}`: {1}")]
    InvalidParameter(&'static str, String),

    /// Linear algebra failure, e.g. a singular matrix.
    #[error(transparent)]
    Linalg(#[from] LinalgError),
}
