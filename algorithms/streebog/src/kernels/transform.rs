//! Transform Layer
//!
//! The three state transformations of the round function, applied in place:
//! `S` (byte substitution), `P` (byte transposition) and `L` (linear map over
//! GF(2)). Their composition, S then P then L, is `lps`.

use crate::kernels::constants::{Block, A, PI, TAU};

// =============================================================================
// PRIMITIVES
// =============================================================================

/// `dst ^= src`, byte by byte.
#[inline]
pub fn xor_in_place(dst: &mut Block, src: &Block) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= s;
    }
}

/// `a ^ b` as a new state.
#[inline]
#[must_use]
pub fn xor(a: &Block, b: &Block) -> Block {
    let mut out = *a;
    xor_in_place(&mut out, b);
    out
}

// =============================================================================
// S, P, L
// =============================================================================

/// S: substitute every byte through `PI`.
#[inline]
pub fn substitute(state: &mut Block) {
    for b in state.iter_mut() {
        *b = PI[usize::from(*b)];
    }
}

/// P: byte at destination `i` comes from source `TAU[i]`.
#[inline]
pub fn permute(state: &mut Block) {
    let src = *state;
    for (dst, &t) in state.iter_mut().zip(TAU.iter()) {
        *dst = src[usize::from(t)];
    }
}

/// L: multiply each big-endian 64-bit word by the fixed matrix `A`.
///
/// Bit 63 of a word selects `A[0]`, bit 0 selects `A[63]`.
#[inline]
pub fn linear(state: &mut Block) {
    for word in state.chunks_exact_mut(8) {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(word);
        let v = u64::from_be_bytes(bytes);

        let mut acc = 0u64;
        for (j, row) in A.iter().enumerate() {
            if (v >> (63 - j)) & 1 == 1 {
                acc ^= row;
            }
        }

        word.copy_from_slice(&acc.to_be_bytes());
    }
}

/// LPS: S, then P, then L.
#[inline]
pub fn lps(state: &mut Block) {
    substitute(state);
    permute(state);
    linear(state);
}

// =============================================================================
// TESTS
// =============================================================================
