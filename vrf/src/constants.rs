//! Constants used in the VRF implementation.

/// Size of a serialized scalar in bytes.
pub const SCALAR_SIZE: usize = 32;

/// Size of an encoded curve point in bytes.
///
/// Points are encoded uncompressed: the x and y coordinates as fixed-width
/// 32-byte big-endian integers. The point at infinity has no encoding.
pub const POINT_SIZE: usize = 64;

/// Size of a VRF output digest in bytes.
pub const OUTPUT_SIZE: usize = 32;

/// Size of an encoded proof in bytes.
///
/// A proof consists of:
/// - The challenge scalar s (32 bytes)
/// - The response scalar t (32 bytes)
/// - The VRF point V (64 bytes)
/// Total: 128 bytes
pub const PROOF_SIZE: usize = POINT_SIZE + 2 * SCALAR_SIZE;
