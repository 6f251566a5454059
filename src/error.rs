//! Typed errors for topology selection and spectral analysis.

use thiserror::Error;

/// Every variant is terminal for the current calculation; the core never
/// substitutes a default for rejected input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HuckelError {
    /// Category, topology or solid name outside the recognized set.
    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    /// Non-positive or malformed size parameter for a chain or ring.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The symmetric eigensolver did not converge.
    #[error("diagonalization of {dimension}x{dimension} matrix did not converge within {max_iterations} iterations")]
    NumericFailure {
        dimension: usize,
        max_iterations: usize,
    },
}
