//! Deterministic hash-to-curve via try-and-increment.
//!
//! The candidate x starts at SHA-256(message) reduced mod p and is
//! incremented until x^3 + b is a quadratic residue. Euler's criterion
//! decides residuosity and the square root is a single exponentiation,
//! valid because p = 3 (mod 4). An exhausted attempt budget is an error;
//! no substitute point is ever returned.

use num_bigint::BigUint;
use num_traits::One;
use sha2::{Digest, Sha256};

use crate::affine::Affine;
use crate::basefield::{self, BaseField};
use crate::errors::HashToCurveError;

/// Attempt budget for the try-and-increment search.
pub const MAX_ATTEMPTS: usize = 1000;

/// Map an arbitrary message to a point on the curve.
///
/// Identical messages always map to identical points, so the map can be
/// recomputed independently by provers and verifiers.
pub fn hash_to_curve(message: &[u8]) -> Result<Affine, HashToCurveError> {
    let p = basefield::modulus();
    let b = Affine::curve_b();

    let digest = Sha256::digest(message);
    let x0 = BigUint::from_bytes_be(&digest) % p;

    let (x, y) = try_and_increment(x0, p, b.as_biguint())?;
    Ok(Affine::new(BaseField::new(x), BaseField::new(y)))
}

/// Search for the first x at or after `x0` whose x^3 + b is a square mod
/// the odd prime `p`, assuming p = 3 (mod 4).
fn try_and_increment(
    x0: BigUint,
    p: &BigUint,
    b: &BigUint,
) -> Result<(BigUint, BigUint), HashToCurveError> {
    let one = BigUint::one();
    let legendre_exp = (p - &one) >> 1;
    let sqrt_exp = (p + &one) >> 2;
    let three = BigUint::from(3u32);

    let mut x = x0;
    for _ in 0..MAX_ATTEMPTS {
        let y_squared = (x.modpow(&three, p) + b) % p;

        // Euler's criterion: y^2 is a nonzero square iff this is 1.
        if y_squared.modpow(&legendre_exp, p).is_one() {
            let y = y_squared.modpow(&sqrt_exp, p);
            return Ok((x, y));
        }

        x = (x + &one) % p;
    }

    Err(HashToCurveError::AttemptsExhausted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let first = hash_to_curve(b"collective randomness").unwrap();
        let second = hash_to_curve(b"collective randomness").unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_point_is_on_curve() {
        let point = hash_to_curve(b"some message").unwrap();

        assert!(!point.is_infinity());
        assert!(point.is_on_curve());
    }

    #[test]
    fn test_distinct_messages_distinct_points() {
        let a = hash_to_curve(b"message a").unwrap();
        let b = hash_to_curve(b"message b").unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn test_exhaustion_is_an_error() {
        // Over p = 7 with b = 6 no x yields a nonzero square: the cubes
        // mod 7 are {0, 1, 6}, so x^3 + 6 is always 0, 5 or 6, none of
        // which passes Euler's criterion. The search must fail rather
        // than fall back to some fixed point.
        let p = BigUint::from(7u32);
        let b = BigUint::from(6u32);

        let result = try_and_increment(BigUint::from(0u32), &p, &b);
        assert_eq!(result, Err(HashToCurveError::AttemptsExhausted));
    }
}
