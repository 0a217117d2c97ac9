//! Elliptic curve group for the secp256k1-shaped VRF curve.
//!
//! This crate provides the prime base field, the scalar field of the group
//! order, affine curve points with the full group law, and a deterministic
//! try-and-increment hash-to-curve map. The curve parameters are fixed to
//! the values in the `affine` module.

mod affine;
mod basefield;
mod errors;
mod hash_to_curve;
mod scalarfield;

pub use affine::Affine;
pub use basefield::BaseField;
pub use errors::{ArithmeticError, HashToCurveError};
pub use hash_to_curve::{hash_to_curve, MAX_ATTEMPTS};
pub use scalarfield::ScalarField;
