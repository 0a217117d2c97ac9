// E(GF(p)) : y^2 = x^3 + 7 over p = 2^256 - 2^32 - 977 (secp256k1 parameters)
// Generator point G:
//   (79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798 :
//    483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8 : 1)
// Group prime order n: FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
// Curve cofactor: 1

use std::sync::LazyLock;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::basefield::{self, BaseField};
use crate::errors::ArithmeticError;
use crate::scalarfield::ScalarField;

static GENERATOR: LazyLock<Affine> = LazyLock::new(|| {
    let x = BigUint::parse_bytes(
        b"79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798",
        16,
    )
    .unwrap();
    let y = BigUint::parse_bytes(
        b"483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8",
        16,
    )
    .unwrap();

    Affine::new(BaseField::new(x), BaseField::new(y))
});

/// Affine point on the elliptic curve.
/// Represents a point in affine coordinates (x, y) or the point at infinity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affine {
    /// The x-coordinate of the point
    pub x: BaseField,
    /// The y-coordinate of the point
    pub y: BaseField,
    /// Whether this point is the point at infinity (identity element)
    pub is_infinity: bool,
}

impl Affine {
    // Curve parameters: y^2 = x^3 + a*x + b with a = 0, b = 7

    /// Get the 'a' coefficient: 0
    #[inline]
    fn curve_a() -> BaseField {
        BaseField::zero()
    }

    /// Get the 'b' coefficient: 7
    #[inline]
    pub(crate) fn curve_b() -> BaseField {
        BaseField::from_u64(7)
    }

    /// The point at infinity (identity element).
    pub fn infinity() -> Self {
        Affine {
            x: BaseField::zero(),
            y: BaseField::zero(),
            is_infinity: true,
        }
    }

    /// Create a new affine point.
    pub fn new(x: BaseField, y: BaseField) -> Self {
        Affine {
            x,
            y,
            is_infinity: false,
        }
    }

    /// Check if this point is the point at infinity.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.is_infinity
    }

    /// Check if a point is on the curve: y^2 = x^3 + a*x + b.
    pub fn is_on_curve(&self) -> bool {
        if self.is_infinity {
            return true;
        }

        let y2 = &self.y * &self.y;
        let x2 = &self.x * &self.x;
        let x3 = &x2 * &self.x;
        let ax = Self::curve_a() * &self.x;
        let rhs = (x3 + &ax) + &Self::curve_b();

        y2 == rhs
    }

    /// Generator point G of the prime-order group.
    pub fn generator() -> Self {
        GENERATOR.clone()
    }

    /// Add two points on the curve.
    ///
    /// Identity operands pass through, and adding a point to its inverse
    /// yields the point at infinity. An arithmetic failure can only come
    /// from inverting a zero denominator, which the case analysis rules
    /// out for canonical coordinates.
    pub fn add(&self, other: &Self) -> Result<Self, ArithmeticError> {
        if self.is_infinity {
            return Ok(other.clone());
        }
        if other.is_infinity {
            return Ok(self.clone());
        }

        if self.x == other.x {
            if self.y == other.y {
                // Tangent case, including y = 0 which doubles to infinity.
                return self.double();
            }
            // Points are inverses, the chord is vertical.
            return Ok(Self::infinity());
        }

        // Chord slope: λ = (y2 - y1) / (x2 - x1)
        let lambda = (&other.y - &self.y) * (&other.x - &self.x).inverse()?;

        // x_r = λ^2 - x1 - x2
        let x_r = (&lambda * &lambda) - &self.x - &other.x;

        // y_r = λ(x1 - x_r) - y1
        let y_r = &lambda * &(&self.x - &x_r) - &self.y;

        Ok(Affine::new(x_r, y_r))
    }

    /// Point doubling: 2*P.
    pub fn double(&self) -> Result<Self, ArithmeticError> {
        if self.is_infinity {
            return Ok(self.clone());
        }

        // If y = 0 the tangent is vertical, so 2P = O.
        if self.y.is_zero() {
            return Ok(Self::infinity());
        }

        // Tangent slope: λ = (3x^2 + a) / (2y)
        let x2 = &self.x * &self.x;
        let three_x2 = (&x2 + &x2) + &x2;
        let numerator = three_x2 + &Self::curve_a();
        let lambda = numerator * (&self.y + &self.y).inverse()?;

        // x_r = λ^2 - 2x
        let x_r = (&lambda * &lambda) - &self.x - &self.x;

        // y_r = λ(x - x_r) - y
        let y_r = &lambda * &(&self.x - &x_r) - &self.y;

        Ok(Affine::new(x_r, y_r))
    }

    /// Negate a point.
    pub fn negate(&self) -> Self {
        if self.is_infinity {
            return self.clone();
        }
        Affine::new(self.x.clone(), -&self.y)
    }

    /// Multiply a point by a scalar using double-and-add.
    ///
    /// The scalar bits are processed least significant first; a zero scalar
    /// yields the point at infinity. The ladder is variable time.
    pub fn scalar_mul(&self, scalar: &ScalarField) -> Result<Self, ArithmeticError> {
        let mut result = Self::infinity();
        let mut addend = self.clone();

        for i in 0..scalar.bits() {
            if scalar.bit(i) {
                result = result.add(&addend)?;
            }
            addend = addend.double()?;
        }

        Ok(result)
    }

    /// Fixed-width encoding: x || y, each coordinate 32 bytes big-endian.
    ///
    /// The point at infinity has no encoding and yields `None`.
    pub fn to_bytes(&self) -> Option<[u8; 64]> {
        if self.is_infinity {
            return None;
        }

        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&self.x.to_bytes_be());
        out[32..].copy_from_slice(&self.y.to_bytes_be());
        Some(out)
    }

    /// Decode a fixed-width point encoding.
    ///
    /// Rejects coordinates outside `[0, p)` and coordinate pairs that do
    /// not satisfy the curve equation. Never produces the point at
    /// infinity.
    pub fn from_bytes(bytes: &[u8; 64]) -> Option<Self> {
        let x = BigUint::from_bytes_be(&bytes[..32]);
        let y = BigUint::from_bytes_be(&bytes[32..]);

        if x >= *basefield::modulus() || y >= *basefield::modulus() {
            return None;
        }

        let point = Affine::new(BaseField::new(x), BaseField::new(y));
        point.is_on_curve().then_some(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_infinity() {
        let inf = Affine::infinity();
        assert!(inf.is_infinity());
        assert!(inf.is_on_curve());
    }

    #[test]
    fn test_generator_on_curve() {
        let g = Affine::generator();
        assert!(g.is_on_curve(), "Generator point is not on the curve");
        assert!(!g.is_infinity());
    }

    #[test]
    fn test_point_addition_with_infinity() {
        let g = Affine::generator();
        let inf = Affine::infinity();

        assert_eq!(g.add(&inf).unwrap(), g);
        assert_eq!(inf.add(&g).unwrap(), g);
        assert_eq!(inf.add(&inf).unwrap(), inf);
    }

    #[test]
    fn test_point_doubling() {
        let g = Affine::generator();
        let g2 = g.double().unwrap();

        assert!(g2.is_on_curve(), "Doubled point is not on the curve");
        assert_eq!(g.add(&g).unwrap(), g2);
    }

    #[test]
    fn test_doubling_with_zero_y() {
        // Not an on-curve point, but the guard must still route it to
        // infinity instead of attempting to invert zero.
        let p = Affine::new(BaseField::from_u64(3), BaseField::zero());
        assert_eq!(p.double().unwrap(), Affine::infinity());
        assert_eq!(p.add(&p).unwrap(), Affine::infinity());
    }

    #[test]
    fn test_point_negation() {
        let g = Affine::generator();
        let neg_g = g.negate();

        assert!(neg_g.is_on_curve());
        assert_eq!(g.add(&neg_g).unwrap(), Affine::infinity());
    }

    #[test]
    fn test_addition_commutes() {
        let g = Affine::generator();
        let g2 = g.double().unwrap();

        assert_eq!(g.add(&g2).unwrap(), g2.add(&g).unwrap());
    }

    #[test]
    fn test_addition_associates() {
        let g = Affine::generator();
        let g2 = g.double().unwrap();
        let g4 = g2.double().unwrap();

        let left = g.add(&g2).unwrap().add(&g4).unwrap();
        let right = g.add(&g2.add(&g4).unwrap()).unwrap();
        assert_eq!(left, right);
    }

    #[test]
    fn test_scalar_multiplication() {
        let g = Affine::generator();
        let result = g.scalar_mul(&ScalarField::from_u64(5)).unwrap();

        // 5*G = G + G + G + G + G
        let mut expected = Affine::infinity();
        for _ in 0..5 {
            expected = expected.add(&g).unwrap();
        }

        assert_eq!(result, expected);
        assert!(result.is_on_curve());
    }

    #[test]
    fn test_scalar_mul_zero() {
        let g = Affine::generator();
        let result = g.scalar_mul(&ScalarField::zero()).unwrap();

        assert_eq!(result, Affine::infinity());
    }

    #[test]
    fn test_scalar_mul_one() {
        let g = Affine::generator();
        let result = g.scalar_mul(&ScalarField::from_u64(1)).unwrap();

        assert_eq!(result, g);
    }

    #[test]
    fn test_scalar_mul_distributes() {
        let mut rng = StdRng::seed_from_u64(42);
        let g = Affine::generator();
        let a = ScalarField::random(&mut rng);
        let b = ScalarField::random(&mut rng);

        // (a + b) * G = a*G + b*G
        let left = g.scalar_mul(&(&a + &b)).unwrap();
        let right = g
            .scalar_mul(&a)
            .unwrap()
            .add(&g.scalar_mul(&b).unwrap())
            .unwrap();

        assert_eq!(left, right);
    }

    #[test]
    fn test_scalar_mul_composes() {
        let mut rng = StdRng::seed_from_u64(42);
        let g = Affine::generator();
        let a = ScalarField::random(&mut rng);
        let b = ScalarField::random(&mut rng);

        // a * (b * G) = (a * b) * G
        let left = g.scalar_mul(&b).unwrap().scalar_mul(&a).unwrap();
        let right = g.scalar_mul(&(&a * &b)).unwrap();

        assert_eq!(left, right);
    }

    #[test]
    fn test_bytes_round_trip() {
        let g = Affine::generator();
        let bytes = g.to_bytes().expect("affine point encodes");

        assert_eq!(Affine::from_bytes(&bytes), Some(g));
        assert_eq!(Affine::infinity().to_bytes(), None);
    }

    #[test]
    fn test_from_bytes_rejects_off_curve() {
        // (0, 0) does not satisfy y^2 = x^3 + 7.
        assert_eq!(Affine::from_bytes(&[0u8; 64]), None);

        // Coordinates at or above the modulus are rejected outright.
        assert_eq!(Affine::from_bytes(&[0xff; 64]), None);
    }
}
