use thiserror::Error;

/// Error type for this crate.
///
/// Every failure is detected before any mutation occurs and is
/// reported synchronously to the caller; there is no retry or
/// internal recovery.
///
/// # Example
///
/// ```
/// let rows = vec![vec![1, 2], vec![3]];
/// assert!(matches!(
///     squaremat::Matrix::from_rows(rows),
///     Err(squaremat::MatrixError::InvalidRows(_))
/// ));
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MatrixError {
    /// A constructor was given a dimension of zero.
    #[error("matrix dimension must be > 0")]
    InvalidDimension,
    /// Row-literal input was empty or not square.
    #[error("{0}")]
    InvalidRows(String),
    /// A row or column index was >= the matrix dimension.
    #[error("{0}")]
    IndexOutOfRange(String),
    /// A binary matrix operation was given operands of differing dimension.
    #[error("{0}")]
    DimensionMismatch(String),
    /// Scalar division by zero.
    #[error("division by zero")]
    DivisionByZero,
    /// Scalar modulo by zero.
    #[error("modulo by zero")]
    ModuloByZero,
    /// Errors coming from `serde_yaml`.
    #[error(transparent)]
    YamlError(#[from] serde_yaml::Error),
    #[cfg(feature = "json")]
    #[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
    /// Errors coming from `serde_json`.
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
}
