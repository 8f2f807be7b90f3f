//! Chaining State
//!
//! The three 512-bit values threaded through a single message: chaining
//! value `h`, bit counter `N` and checksum `Sigma`.

use crate::kernels::arith::{add_block, add_small};
use crate::kernels::compress::compress;
use crate::kernels::constants::{Block, BLOCK_BITS, STATE_SIZE, ZERO};

// =============================================================================
// STATE
// =============================================================================

/// Per-message accumulators, reset to the IV between messages.
#[derive(Clone)]
pub struct ChainState {
    iv: Block,
    h: Block,
    n: Block,
    sigma: Block,
}

impl ChainState {
    /// Fresh state: `h = iv`, `N = 0`, `Sigma = 0`.
    pub const fn new(iv: Block) -> Self {
        Self {
            iv,
            h: iv,
            n: ZERO,
            sigma: ZERO,
        }
    }

    /// Return to the fresh state for the same IV.
    pub const fn reset(&mut self) {
        self.h = self.iv;
        self.n = ZERO;
        self.sigma = ZERO;
    }

    /// Fold one full 64-byte block.
    pub fn absorb_block(&mut self, m: &Block) {
        self.h = compress(&self.n, &self.h, m);
        add_small(&mut self.n, BLOCK_BITS);
        add_block(&mut self.sigma, m);
    }

    /// Pad and fold the `r < 64` leading bytes left after the full blocks.
    pub fn absorb_tail(&mut self, tail: &[u8]) {
        let m = pad(tail);
        self.h = compress(&self.n, &self.h, &m);
        add_small(&mut self.n, tail.len() * 8);
        add_block(&mut self.sigma, &m);
    }

    /// Fold `N` and then `Sigma` under an all-zero mask; returns `h`.
    pub fn finish(&mut self) -> Block {
        self.h = compress(&ZERO, &self.h, &self.n);
        self.h = compress(&ZERO, &self.h, &self.sigma);
        self.h
    }
}

// =============================================================================
// PADDING
// =============================================================================

/// Right-align `tail` in a block with a `0x01` marker directly before it.
///
/// `tail.len()` must be below `STATE_SIZE`.
pub fn pad(tail: &[u8]) -> Block {
    debug_assert!(tail.len() < STATE_SIZE);
    let r = tail.len();
    let mut m = ZERO;
    m[STATE_SIZE - 1 - r] = 0x01;
    m[STATE_SIZE - r..].copy_from_slice(tail);
    m
}

// =============================================================================
// TESTS
// =============================================================================
