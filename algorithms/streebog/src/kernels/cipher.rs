//! Block Cipher `E`
//!
//! 12-round substitution-permutation network over a 64-byte state, keyed by
//! a 64-byte key. The last round adds the final round key without `lps`.

use crate::kernels::constants::{Block, C, ROUNDS};
use crate::kernels::transform::{lps, xor_in_place};

/// Round keys `K[0..=ROUNDS]`.
pub type RoundKeys = [Block; ROUNDS + 1];

// =============================================================================
// KEY SCHEDULE
// =============================================================================

/// Expand `key` into the 13 round keys: `K[i] = LPS(K[i-1] ^ C[i-1])`.
#[must_use]
pub fn key_schedule(key: &Block) -> RoundKeys {
    let mut keys = [*key; ROUNDS + 1];
    for i in 1..=ROUNDS {
        let mut k = keys[i - 1];
        xor_in_place(&mut k, &C[i - 1]);
        lps(&mut k);
        keys[i] = k;
    }
    keys
}

// =============================================================================
// ENCRYPTION
// =============================================================================

/// `E(key, block)`.
#[must_use]
pub fn encrypt(key: &Block, block: &Block) -> Block {
    let keys = key_schedule(key);

    let mut state = *block;
    for k in &keys[..ROUNDS] {
        xor_in_place(&mut state, k);
        lps(&mut state);
    }
    xor_in_place(&mut state, &keys[ROUNDS]);
    state
}

// =============================================================================
// TESTS
// =============================================================================
