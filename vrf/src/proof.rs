//! Proof and output types plus challenge hashing for the VRF.

use curve::{Affine, ScalarField};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::constants::{OUTPUT_SIZE, POINT_SIZE};
use crate::errors::VrfError;

/// A VRF proof consisting of two scalars and a curve point.
///
/// The proof is a triple `(s, t, V)` where:
/// - `s` is the Fiat-Shamir challenge scalar
/// - `t` is the response scalar
/// - `V = sk * H(message)` is the VRF point
///
/// # Structure
///
/// The verification equations `t*G + s*pk` and `t*H + s*V` reconstruct the
/// prover's nonce commitments `r*G` and `r*H` exactly when `t = r - s*sk`,
/// which holds only if `V` and `pk` share the same secret scalar relative
/// to the bases `H` and `G`. The proof carries no state beyond its three
/// components.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof {
    /// The challenge scalar s = SHA-256(G || H || pk || V || rG || rH) mod n
    pub s: ScalarField,
    /// The response scalar t = r - s * sk, where r is the proof nonce
    pub t: ScalarField,
    /// The VRF point V = sk * H(message)
    pub v: Affine,
}

/// A 32-byte VRF output digest.
///
/// The output is SHA-256 over the fixed-width coordinates of the VRF
/// point, so it is a deterministic function of the secret key and the
/// message alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VrfOutput(pub [u8; OUTPUT_SIZE]);

impl Proof {
    /// Recompute the output digest bound to this proof's VRF point.
    ///
    /// This does not verify the proof. For an untrusted proof call
    /// `PublicKey::verify`, which checks this digest against the claimed
    /// output as part of verification.
    ///
    /// # Errors
    ///
    /// Returns `VrfError::InvalidPoint` if the VRF point is the point at
    /// infinity, which no honest prover produces.
    pub fn to_output(&self) -> Result<VrfOutput, VrfError> {
        let encoded = encode_point(&self.v)?;
        let digest: [u8; OUTPUT_SIZE] = Sha256::digest(encoded).into();
        Ok(VrfOutput(digest))
    }
}

/// Computes the Fiat-Shamir challenge for the discrete-log-equality proof.
///
/// The challenge is `SHA-256(G || H || pk || V || rG || rH) mod n`, with every
/// point contributing its coordinates in the fixed-width encoding. The
/// transcript binds both bases and both images, so a proof for one
/// (message, key) pair cannot be replayed for another.
pub(crate) fn hash_challenge(
    h: &Affine,
    pk: &Affine,
    v: &Affine,
    rg: &Affine,
    rh: &Affine,
) -> Result<ScalarField, VrfError> {
    let generator = Affine::generator();

    let mut input = Vec::with_capacity(6 * POINT_SIZE);
    for point in [&generator, h, pk, v, rg, rh] {
        input.extend_from_slice(&encode_point(point)?);
    }

    let digest: [u8; 32] = Sha256::digest(&input).into();
    Ok(ScalarField::from_bytes_mod_order(&digest))
}

/// Encodes a curve point as x || y, 32-byte big-endian each.
///
/// The point at infinity never appears in an honest transcript; hitting
/// one is an invariant violation reported as `InvalidPoint`.
fn encode_point(point: &Affine) -> Result<[u8; POINT_SIZE], VrfError> {
    point.to_bytes().ok_or(VrfError::InvalidPoint)
}
