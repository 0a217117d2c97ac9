//! Base field of the curve. p = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F
//!
//! Elements wrap a `BigUint` kept reduced into `[0, p)`, so they are never
//! negative and never carry excess multiples of the modulus. Inversion uses
//! the iterative extended Euclidean algorithm and reports a missing inverse
//! as an [`ArithmeticError`] instead of panicking.

use core::fmt::{self, Debug, Display, Formatter};
use core::ops::{Add, Mul, Neg, Sub};
use std::sync::LazyLock;

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::errors::ArithmeticError;

// Field modulus: p = 2^256 - 2^32 - 977
static MODULUS: LazyLock<BigUint> = LazyLock::new(|| {
    BigUint::parse_bytes(
        b"FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F",
        16,
    )
    .unwrap()
});

/// The field modulus p.
pub(crate) fn modulus() -> &'static BigUint {
    &MODULUS
}

/// Base field element, reduced into `[0, p)`.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseField {
    value: BigUint,
}

impl BaseField {
    /// Create a field element, reducing the value mod p.
    pub fn new(value: BigUint) -> Self {
        BaseField {
            value: value % &*MODULUS,
        }
    }

    /// The additive identity.
    pub fn zero() -> Self {
        BaseField {
            value: BigUint::zero(),
        }
    }

    /// The multiplicative identity.
    pub fn one() -> Self {
        BaseField {
            value: BigUint::one(),
        }
    }

    /// Create a field element from a u64 value.
    pub fn from_u64(val: u64) -> Self {
        BaseField {
            value: BigUint::from(val),
        }
    }

    /// Check if this field element is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Compute the multiplicative inverse.
    ///
    /// Runs the extended Euclidean algorithm iteratively. Fails iff
    /// `gcd(value, p) != 1`, which for the prime modulus means the element
    /// is zero; callers are expected to rule that case out first.
    pub fn inverse(&self) -> Result<Self, ArithmeticError> {
        mod_inverse(&self.value, &MODULUS).map(|value| BaseField { value })
    }

    /// Fixed-width 32-byte big-endian encoding.
    pub fn to_bytes_be(&self) -> [u8; 32] {
        let bytes = self.value.to_bytes_be();
        let mut out = [0u8; 32];
        out[32 - bytes.len()..].copy_from_slice(&bytes);
        out
    }

    /// Decode a 32-byte big-endian integer, reducing mod p.
    pub fn from_bytes_be(bytes: &[u8; 32]) -> Self {
        Self::new(BigUint::from_bytes_be(bytes))
    }

    #[inline]
    pub(crate) fn as_biguint(&self) -> &BigUint {
        &self.value
    }
}

/// Iterative extended Euclidean algorithm over the given modulus.
fn mod_inverse(a: &BigUint, m: &BigUint) -> Result<BigUint, ArithmeticError> {
    let modulus = BigInt::from(m.clone());
    let mut r0 = modulus.clone();
    let mut r1 = BigInt::from(a.clone());
    let mut t0 = BigInt::zero();
    let mut t1 = BigInt::one();

    while !r1.is_zero() {
        let q = &r0 / &r1;
        (r0, r1) = (r1.clone(), r0 - &q * &r1);
        (t0, t1) = (t1.clone(), t0 - &q * &t1);
    }

    if !r0.is_one() {
        return Err(ArithmeticError::NoInverse);
    }

    let normalized = ((t0 % &modulus) + &modulus) % &modulus;
    Ok(normalized.magnitude().clone())
}

impl Add for BaseField {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl Add<&BaseField> for BaseField {
    type Output = BaseField;

    #[inline]
    fn add(self, rhs: &BaseField) -> BaseField {
        &self + rhs
    }
}

impl Add<&BaseField> for &BaseField {
    type Output = BaseField;

    #[inline]
    fn add(self, rhs: &BaseField) -> BaseField {
        BaseField {
            value: (&self.value + &rhs.value) % &*MODULUS,
        }
    }
}

impl Sub for BaseField {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl Sub<&BaseField> for BaseField {
    type Output = BaseField;

    #[inline]
    fn sub(self, rhs: &BaseField) -> BaseField {
        &self - rhs
    }
}

impl Sub<&BaseField> for &BaseField {
    type Output = BaseField;

    #[inline]
    fn sub(self, rhs: &BaseField) -> BaseField {
        // Lift above the modulus before subtracting so the value never
        // goes negative.
        BaseField {
            value: (&self.value + &*MODULUS - &rhs.value) % &*MODULUS,
        }
    }
}

impl Mul for BaseField {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl Mul<&BaseField> for BaseField {
    type Output = BaseField;

    #[inline]
    fn mul(self, rhs: &BaseField) -> BaseField {
        &self * rhs
    }
}

impl Mul<&BaseField> for &BaseField {
    type Output = BaseField;

    #[inline]
    fn mul(self, rhs: &BaseField) -> BaseField {
        BaseField {
            value: (&self.value * &rhs.value) % &*MODULUS,
        }
    }
}

impl Neg for BaseField {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        -&self
    }
}

impl Neg for &BaseField {
    type Output = BaseField;

    #[inline]
    fn neg(self) -> BaseField {
        BaseField {
            value: (&*MODULUS - &self.value) % &*MODULUS,
        }
    }
}

impl Display for BaseField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:064x}", self.value)
    }
}

impl Debug for BaseField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "BaseField({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_one() {
        assert_eq!(BaseField::zero() + BaseField::zero(), BaseField::zero());
        assert_eq!(BaseField::one() * BaseField::one(), BaseField::one());
        assert_eq!(BaseField::zero() * BaseField::one(), BaseField::zero());
        assert_eq!(BaseField::one() + BaseField::zero(), BaseField::one());
    }

    #[test]
    fn test_addition() {
        let a = BaseField::from_u64(5);
        let b = BaseField::from_u64(7);
        assert_eq!(a + b, BaseField::from_u64(12));
    }

    #[test]
    fn test_subtraction_wraps() {
        let a = BaseField::from_u64(3);
        let b = BaseField::from_u64(10);
        let c = &a - &b;
        assert_eq!(c + b, a);
    }

    #[test]
    fn test_multiplication() {
        let a = BaseField::from_u64(6);
        let b = BaseField::from_u64(7);
        assert_eq!(a * b, BaseField::from_u64(42));
    }

    #[test]
    fn test_negation() {
        let a = BaseField::from_u64(5);
        let b = -&a;
        assert_eq!(a + b, BaseField::zero());
        assert_eq!(-BaseField::zero(), BaseField::zero());
    }

    #[test]
    fn test_inverse() {
        let a = BaseField::from_u64(5);
        let a_inv = a.inverse().expect("inverse");
        assert_eq!(a * a_inv, BaseField::one());
    }

    #[test]
    fn test_inverse_of_zero_fails() {
        assert_eq!(
            BaseField::zero().inverse(),
            Err(ArithmeticError::NoInverse)
        );
    }

    #[test]
    fn test_bytes_fixed_width() {
        let one = BaseField::one();
        let bytes = one.to_bytes_be();
        assert_eq!(bytes.len(), 32);
        assert_eq!(bytes[31], 1);
        assert!(bytes[..31].iter().all(|&b| b == 0));
        assert_eq!(BaseField::from_bytes_be(&bytes), one);
    }

    #[test]
    fn test_new_reduces() {
        let wrapped = BaseField::new(modulus() + 5u32);
        assert_eq!(wrapped, BaseField::from_u64(5));
    }
}
