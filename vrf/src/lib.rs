//! Verifiable random function over the secp256k1-shaped curve.
//!
//! This library implements an elliptic-curve VRF using:
//! - The secp256k1-shaped curve from the `curve` crate
//! - SHA-256 for the Fiat-Shamir challenge and the output digest
//! - A Chaum-Pedersen proof that the VRF point and the public key share
//!   the same secret scalar
//!
//! # Overview
//!
//! A VRF is a keyed function whose output is pseudorandom yet publicly
//! verifiable: for every message the holder of the secret key produces a
//! 32-byte output together with a proof, and anyone holding the public key
//! can check that the output was computed correctly without learning the
//! secret key. A sequence of outputs can be folded into a single collective
//! random value with [`aggregate`].
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use vrf::{SecretKey, aggregate};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let secret_key = SecretKey::random(&mut rng);
//! let public_key = secret_key.public_key().expect("public key");
//!
//! let (output, proof) = secret_key
//!     .evaluate(&mut rng, b"lottery round 7")
//!     .expect("evaluate");
//!
//! assert!(public_key.verify(b"lottery round 7", &output, &proof));
//! assert!(!public_key.verify(b"lottery round 8", &output, &proof));
//!
//! let collective = aggregate(&[output]);
//! assert_eq!(collective.len(), 32);
//! ```
//!
//! # Security Considerations
//!
//! - Always use a cryptographically secure random number generator (CSRNG)
//! - Each proof must use a fresh random nonce
//! - Protect the secret key from unauthorized access
//! - Scalar multiplication is not constant time; deployments with
//!   side-channel requirements need a hardened curve backend

mod aggregate;
mod constants;
mod errors;
mod keys;
mod proof;


pub use aggregate::{aggregate, aggregate_mod};
pub use constants::{OUTPUT_SIZE, POINT_SIZE, PROOF_SIZE, SCALAR_SIZE};
pub use errors::VrfError;
pub use keys::{PublicKey, SecretKey};
pub use proof::{Proof, VrfOutput};
