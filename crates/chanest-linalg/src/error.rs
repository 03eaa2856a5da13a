/// An error type for the linear algebra helpers.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum LinalgError {
    /// The operation requires a square matrix.
    #[error("Matrix must be square, got {0}x{1}")]
    NotSquare(usize, usize),

    /// The matrix could not be inverted.
    #[error("Matrix of size {0}x{0} is singular to working precision")]
    SingularMatrix(usize),

    /// The flat buffer does not hold `rows * cols` elements.
    #[error("Data length ({0}) does not match the matrix size ({1}x{2})")]
    InvalidLength(usize, usize, usize),
}
