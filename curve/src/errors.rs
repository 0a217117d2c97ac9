//! Error types for the curve arithmetic layer.

use thiserror::Error;

use crate::hash_to_curve::MAX_ATTEMPTS;

/// Failure of a modular arithmetic operation.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    /// The operand shares a factor with the modulus, so no modular inverse
    /// exists. Over a prime modulus this can only happen for zero.
    #[error("inverse does not exist")]
    NoInverse,
}

/// Failure to map a message onto the curve.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum HashToCurveError {
    /// No x candidate produced a quadratic residue within the attempt
    /// budget. The search stops here; no substitute point is returned.
    #[error("no curve point found within {MAX_ATTEMPTS} attempts")]
    AttemptsExhausted,
}
