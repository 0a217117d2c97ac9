//! Secret and public keys for the VRF.

use curve::{Affine, ScalarField, hash_to_curve};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::VrfError;
use crate::proof::{Proof, VrfOutput, hash_challenge};

/// A secret VRF key.
///
/// The secret key is a nonzero scalar in the scalar field of the curve.
/// It must be kept secret: anyone holding it can compute the VRF output
/// for every message.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use vrf::SecretKey;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let secret_key = SecretKey::random(&mut rng);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretKey {
    scalar: ScalarField,
}

/// A public VRF key.
///
/// The public key is a point on the curve, derived from the secret key by
/// multiplying the curve generator by the secret scalar. It verifies
/// proofs but cannot produce them.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use vrf::SecretKey;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let secret_key = SecretKey::random(&mut rng);
/// let public_key = secret_key.public_key().expect("public key");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    point: Affine,
}

impl SecretKey {
    /// Generates a random secret key using the provided random number
    /// generator.
    ///
    /// The scalar is drawn uniformly from `[1, n)`; the negligible zero
    /// draw is resampled.
    ///
    /// # Arguments
    ///
    /// * `rng` - A cryptographically secure random number generator
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        loop {
            let scalar = ScalarField::random(rng);
            if !scalar.is_zero() {
                return Self { scalar };
            }
        }
    }

    /// Builds a secret key from an externally supplied scalar.
    ///
    /// # Errors
    ///
    /// Returns `VrfError::InvalidSecretKey` if the scalar is zero; secret
    /// keys are drawn from `[1, n)`.
    pub fn from_scalar(scalar: ScalarField) -> Result<Self, VrfError> {
        if scalar.is_zero() {
            return Err(VrfError::InvalidSecretKey);
        }
        Ok(Self { scalar })
    }

    /// Derives the public key `sk * G` for this secret key.
    pub fn public_key(&self) -> Result<PublicKey, VrfError> {
        let point = Affine::generator().scalar_mul(&self.scalar)?;
        Ok(PublicKey { point })
    }

    /// Evaluates the VRF on a message.
    ///
    /// Produces the 32-byte output together with the proof of correct
    /// evaluation:
    /// 1. Hash the message to a curve point `H`
    /// 2. Compute the VRF point `V = sk * H`
    /// 3. Draw a fresh nonce `r` and commit to `r*G` and `r*H`
    /// 4. Derive the challenge `s = SHA-256(G || H || pk || V || rG || rH) mod n`
    /// 5. Respond with `t = r - s * sk`
    ///
    /// The output is SHA-256 over `V`'s coordinates, so repeated
    /// evaluation of the same message yields the same output under fresh
    /// proofs.
    ///
    /// # Errors
    ///
    /// Propagates `HashToCurveError` when no curve point exists for the
    /// message within the attempt budget, and arithmetic or encoding
    /// errors from the curve layer. A failure is local to this call; the
    /// key remains usable and retrying with the same message reproduces
    /// the same hash-to-curve failure deterministically.
    ///
    /// # Example
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use vrf::SecretKey;
    ///
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let secret_key = SecretKey::random(&mut rng);
    /// let (output, proof) = secret_key
    ///     .evaluate(&mut rng, b"message")
    ///     .expect("evaluate");
    /// ```
    pub fn evaluate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        message: &[u8],
    ) -> Result<(VrfOutput, Proof), VrfError> {
        let h = hash_to_curve(message)?;
        let v = h.scalar_mul(&self.scalar)?;

        let r = ScalarField::random(rng);
        let rg = Affine::generator().scalar_mul(&r)?;
        let rh = h.scalar_mul(&r)?;

        let public_key = self.public_key()?;
        let s = hash_challenge(&h, &public_key.point, &v, &rg, &rh)?;
        let t = &r - &(&s * &self.scalar);

        let proof = Proof { s, t, v };
        let output = proof.to_output()?;

        Ok((output, proof))
    }
}

impl PublicKey {
    /// Wraps an externally supplied curve point as a public key.
    ///
    /// # Errors
    ///
    /// Returns `VrfError::InvalidPoint` if the point is the point at
    /// infinity or does not lie on the curve.
    pub fn from_point(point: Affine) -> Result<Self, VrfError> {
        if point.is_infinity() || !point.is_on_curve() {
            return Err(VrfError::InvalidPoint);
        }
        Ok(Self { point })
    }

    /// The curve point of this public key.
    pub fn as_point(&self) -> &Affine {
        &self.point
    }

    /// Verifies a VRF output and proof for a message.
    ///
    /// Recomputes `t*G + s*pk` and `t*H + s*V`, rebuilds the challenge
    /// from the same transcript encoding the prover used, and accepts
    /// only if the challenge matches `s` and the claimed output is the
    /// digest of the proof's VRF point.
    ///
    /// This function never panics and never returns an error: a wrong
    /// challenge, a wrong output digest, a point with no encoding and
    /// every other structural mismatch all collapse into `false`.
    ///
    /// # Example
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use vrf::SecretKey;
    ///
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let secret_key = SecretKey::random(&mut rng);
    /// let public_key = secret_key.public_key().expect("public key");
    ///
    /// let (output, proof) = secret_key
    ///     .evaluate(&mut rng, b"message")
    ///     .expect("evaluate");
    /// assert!(public_key.verify(b"message", &output, &proof));
    /// ```
    pub fn verify(&self, message: &[u8], output: &VrfOutput, proof: &Proof) -> bool {
        self.check(message, output, proof).unwrap_or(false)
    }

    /// Fallible body of [`Self::verify`].
    ///
    /// Each failure enumerated in `VrfError` is a rejection; keeping the
    /// set closed here means unrelated programming errors still panic
    /// instead of masquerading as invalid proofs.
    fn check(&self, message: &[u8], output: &VrfOutput, proof: &Proof) -> Result<bool, VrfError> {
        let h = hash_to_curve(message)?;

        // t*G + s*pk and t*H + s*V equal the prover's commitments r*G and
        // r*H exactly when t = r - s*sk.
        let tg = Affine::generator().scalar_mul(&proof.t)?;
        let s_pk = self.point.scalar_mul(&proof.s)?;
        let rg = tg.add(&s_pk)?;

        let th = h.scalar_mul(&proof.t)?;
        let sv = proof.v.scalar_mul(&proof.s)?;
        let rh = th.add(&sv)?;

        let challenge = hash_challenge(&h, &self.point, &proof.v, &rg, &rh)?;

        Ok(challenge == proof.s && proof.to_output()? == *output)
    }
}

impl TryFrom<&SecretKey> for PublicKey {
    type Error = VrfError;

    /// Converts a reference to a secret key into its public key.
    ///
    /// This is equivalent to calling `secret_key.public_key()`.
    fn try_from(sk: &SecretKey) -> Result<Self, Self::Error> {
        sk.public_key()
    }
}
