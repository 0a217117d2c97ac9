//! Folding of VRF outputs into a collective random value.

use sha2::{Digest, Sha256};

use crate::constants::OUTPUT_SIZE;
use crate::proof::VrfOutput;

/// Folds a sequence of VRF outputs into one collective random digest.
///
/// The digest is SHA-256 over the in-order concatenation of the outputs.
/// The fold is deliberately order-sensitive: permuting the inputs changes
/// the result, so callers that need a canonical value must agree on the
/// ordering first.
pub fn aggregate(outputs: &[VrfOutput]) -> [u8; OUTPUT_SIZE] {
    let mut hasher = Sha256::new();
    for output in outputs {
        hasher.update(output.0);
    }
    hasher.finalize().into()
}

/// Draws a bounded collective random number from a sequence of outputs.
///
/// The leading 8 bytes of the aggregate digest, read as a big-endian
/// integer, are reduced modulo `range`.
///
/// # Panics
///
/// Panics if `range` is zero.
pub fn aggregate_mod(outputs: &[VrfOutput], range: u64) -> u64 {
    assert!(range > 0, "range must be nonzero");

    let digest = aggregate(outputs);
    let mut leading = [0u8; 8];
    leading.copy_from_slice(&digest[..8]);

    u64::from_be_bytes(leading) % range
}
