//! A small integer square-matrix value type.
//!
//! The crate provides one central type, [`Matrix`]: an owned n-by-n
//! buffer of `i32` in row-major order, with arithmetic, element-wise
//! operations, exponentiation by squaring, a recursive determinant,
//! transposition, sum-based comparisons, and a simple textual
//! rendering.  It is a self-contained numeric primitive for small
//! programs and teaching exercises, not a linear-algebra library.
//!
//! Matrices can be built directly or loaded from `YAML` (and, with
//! the `json` feature, `JSON`) documents holding a nested list of
//! rows.  Loading runs the same square-shape validation as
//! [`Matrix::from_rows`].
//!
//! # Examples
//!
//! ```
//! let a = squaremat::loads("[[1, 2], [3, 4]]").unwrap();
//! let b = squaremat::Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
//!
//! let sum = &a + &b;
//! assert_eq!(sum[(0, 0)], 6);
//!
//! assert_eq!(a.det(), -2);
//! assert_eq!(a.pow(0), squaremat::Matrix::identity(2).unwrap());
//! assert_eq!(a.to_string(), "[ 1, 2 ]\n[ 3, 4 ]\n");
//! ```
//!
//! # A note on comparisons
//!
//! `==`, `<`, and friends compare the **sum of all elements**, so two
//! structurally different matrices with equal sums compare equal.
//! This mirrors the behavior of the system this crate models and is
//! kept on purpose; use [`Matrix::eq_elements`] for structural
//! equality.

mod macros;

mod error;
mod matrix;
mod operations;

pub use error::MatrixError;
pub use matrix::Matrix;

/// Build a [`Matrix`] from a `YAML` document holding a nested list of
/// rows.
///
/// # Errors
///
/// [`MatrixError::YamlError`] if the document does not parse as
/// nested integer rows or the rows are empty or non-square.
///
/// # Examples
///
/// ```
/// let m = squaremat::loads("[[1, 2], [3, 4]]").unwrap();
/// assert_eq!(m.dim(), 2);
/// assert!(squaremat::loads("[[1, 2], [3]]").is_err());
/// ```
pub fn loads(yaml: &str) -> Result<Matrix, MatrixError> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// Render a [`Matrix`] as a `YAML` nested list of rows.
///
/// The output round-trips through [`loads`].
pub fn dumps(matrix: &Matrix) -> Result<String, MatrixError> {
    Ok(serde_yaml::to_string(matrix)?)
}

/// Build a [`Matrix`] from a `JSON` document holding a nested list of
/// rows.
///
/// # Errors
///
/// [`MatrixError::JsonError`] if the document does not parse as
/// nested integer rows or the rows are empty or non-square.
#[cfg(feature = "json")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
pub fn loads_json(json: &str) -> Result<Matrix, MatrixError> {
    Ok(serde_json::from_str(json)?)
}

/// Render a [`Matrix`] as a `JSON` nested list of rows.
#[cfg(feature = "json")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
pub fn dumps_json(matrix: &Matrix) -> Result<String, MatrixError> {
    Ok(serde_json::to_string(matrix)?)
}
