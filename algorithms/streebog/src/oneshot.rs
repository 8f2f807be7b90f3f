//! Public API Layer
//!
use crate::kernels::constants::{HASH_SIZE_256, HASH_SIZE_512};
use crate::streaming::StreebogHasher;
use crate::types::{HashOutput, Variant};
use subtle::ConstantTimeEq;

// =============================================================================
// GENERIC HASHING
// =============================================================================

/// Compute the Streebog digest of `input` for `variant`.
///
/// # Example
/// ```rust
/// use streebog::Variant;
///
/// let digest = streebog::hash(b"message", Variant::Streebog256);
/// assert_eq!(digest.len(), 32);
/// ```
#[must_use]
pub fn hash(input: &[u8], variant: Variant) -> HashOutput {
    let mut hasher = StreebogHasher::new(variant);
    hasher.update(input);
    hasher.finalize()
}

/// 512-bit digest.
#[must_use]
#[inline]
pub fn hash_512(input: &[u8]) -> [u8; HASH_SIZE_512] {
    let mut out = [0u8; HASH_SIZE_512];
    out.copy_from_slice(hash(input, Variant::Streebog512).as_bytes());
    out
}

/// 256-bit digest.
#[must_use]
#[inline]
pub fn hash_256(input: &[u8]) -> [u8; HASH_SIZE_256] {
    let mut out = [0u8; HASH_SIZE_256];
    out.copy_from_slice(hash(input, Variant::Streebog256).as_bytes());
    out
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Check `expected` against the digest of `input` in constant time.
///
/// A wrong-length `expected` never matches.
///
/// # Example
/// ```rust
/// use streebog::Variant;
///
/// let data = b"Secure Data";
/// let digest = streebog::hash(data, Variant::Streebog512);
/// assert!(streebog::verify(data, Variant::Streebog512, digest.as_bytes()));
/// ```
#[must_use]
pub fn verify(input: &[u8], variant: Variant, expected: &[u8]) -> bool {
    if expected.len() != variant.output_size() {
        return false;
    }
    let computed = hash(input, variant);
    computed.as_bytes().ct_eq(expected).into()
}
