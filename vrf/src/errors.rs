//! Error types for VRF evaluation.

use curve::{ArithmeticError, HashToCurveError};
use thiserror::Error;

/// Errors that can occur while producing a VRF output and proof.
///
/// Verification never surfaces these: `PublicKey::verify` collapses every
/// failure into `false`. An error from `evaluate` is local to that call;
/// the key pair stays intact and later calls are unaffected.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum VrfError {
    /// A point at infinity was encountered where an encodable curve point
    /// was expected.
    ///
    /// The proof transcript and the output digest encode points by their
    /// affine coordinates, which the identity element does not have.
    #[error("point at infinity has no encoding")]
    InvalidPoint,

    /// The secret scalar was zero; secret keys are drawn from `[1, n)`.
    #[error("secret scalar must be nonzero")]
    InvalidSecretKey,

    /// A modular arithmetic operation failed in the curve layer.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),

    /// No curve point was found for the message within the attempt budget.
    #[error(transparent)]
    HashToCurve(#[from] HashToCurveError),
}
