//! Scalar field of the curve. n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
//!
//! Scalars are the exponents of the group: kept reduced into `[0, n)`,
//! sampled by rejection so random draws are uniform, and reduced from digest
//! bytes when a hash output has to land in the scalar field.

use core::fmt::{self, Debug, Display, Formatter};
use core::ops::{Add, Mul, Sub};
use std::sync::LazyLock;

use num_bigint::BigUint;
use num_traits::Zero;
use rand::distr::{Distribution, StandardUniform};
use rand::Rng;
use serde::{Deserialize, Serialize};

// Group order: n = 2^256 - 432420386565659656852420866394968145599
static ORDER: LazyLock<BigUint> = LazyLock::new(|| {
    BigUint::parse_bytes(
        b"FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141",
        16,
    )
    .unwrap()
});

/// The group order n.
pub(crate) fn order() -> &'static BigUint {
    &ORDER
}

/// Scalar field element, reduced into `[0, n)`.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalarField {
    value: BigUint,
}

impl ScalarField {
    /// Create a scalar, reducing the value mod n.
    pub fn new(value: BigUint) -> Self {
        ScalarField {
            value: value % &*ORDER,
        }
    }

    /// The zero scalar.
    pub fn zero() -> Self {
        ScalarField {
            value: BigUint::zero(),
        }
    }

    /// Create a scalar from a u64 value.
    pub fn from_u64(val: u64) -> Self {
        ScalarField {
            value: BigUint::from(val),
        }
    }

    /// Sample a uniform scalar from `[0, n)`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        StandardUniform.sample(rng)
    }

    /// Interpret 32 big-endian bytes as an integer and reduce mod n.
    ///
    /// This is how challenge digests are mapped into the scalar field.
    pub fn from_bytes_mod_order(bytes: &[u8; 32]) -> Self {
        Self::new(BigUint::from_bytes_be(bytes))
    }

    /// Fixed-width 32-byte big-endian encoding.
    pub fn to_bytes_be(&self) -> [u8; 32] {
        let bytes = self.value.to_bytes_be();
        let mut out = [0u8; 32];
        out[32 - bytes.len()..].copy_from_slice(&bytes);
        out
    }

    /// Check if this scalar is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Number of significant bits.
    #[inline]
    pub fn bits(&self) -> u64 {
        self.value.bits()
    }

    /// Value of bit `i`, counting from the least significant.
    #[inline]
    pub fn bit(&self, i: u64) -> bool {
        self.value.bit(i)
    }
}

impl Distribution<ScalarField> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ScalarField {
        // Rejection sampling keeps the draw uniform over [0, n).
        loop {
            let bytes: [u8; 32] = rng.random();
            let value = BigUint::from_bytes_be(&bytes);

            if value < *ORDER {
                return ScalarField { value };
            }
        }
    }
}

impl Add for ScalarField {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl Add<&ScalarField> for ScalarField {
    type Output = ScalarField;

    #[inline]
    fn add(self, rhs: &ScalarField) -> ScalarField {
        &self + rhs
    }
}

impl Add<&ScalarField> for &ScalarField {
    type Output = ScalarField;

    #[inline]
    fn add(self, rhs: &ScalarField) -> ScalarField {
        ScalarField {
            value: (&self.value + &rhs.value) % &*ORDER,
        }
    }
}

impl Sub for ScalarField {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl Sub<&ScalarField> for ScalarField {
    type Output = ScalarField;

    #[inline]
    fn sub(self, rhs: &ScalarField) -> ScalarField {
        &self - rhs
    }
}

impl Sub<&ScalarField> for &ScalarField {
    type Output = ScalarField;

    #[inline]
    fn sub(self, rhs: &ScalarField) -> ScalarField {
        ScalarField {
            value: (&self.value + &*ORDER - &rhs.value) % &*ORDER,
        }
    }
}

impl Mul for ScalarField {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl Mul<&ScalarField> for ScalarField {
    type Output = ScalarField;

    #[inline]
    fn mul(self, rhs: &ScalarField) -> ScalarField {
        &self * rhs
    }
}

impl Mul<&ScalarField> for &ScalarField {
    type Output = ScalarField;

    #[inline]
    fn mul(self, rhs: &ScalarField) -> ScalarField {
        ScalarField {
            value: (&self.value * &rhs.value) % &*ORDER,
        }
    }
}

impl Display for ScalarField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:064x}", self.value)
    }
}

impl Debug for ScalarField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ScalarField({})", self)
    }
}
