//! Execution Engine
//!
//! Drives a buffered message through the chaining state.
//!
//! The message is a big-endian integer: its least significant bytes sit at
//! the end of the buffer. Full blocks are therefore taken from the tail
//! toward the head, and the short remainder left at the head is padded last.

pub mod state;

use crate::kernels::constants::{Block, BLOCK_SIZE, ZERO};
use state::ChainState;

/// Hash `message` from a fresh `state` and leave `state` fresh again.
pub fn digest_message(state: &mut ChainState, message: &[u8]) -> Block {
    state.reset();

    let blocks = message.rchunks_exact(BLOCK_SIZE);
    let head = blocks.remainder();
    let full_blocks = blocks.len();

    for chunk in blocks {
        let mut m = ZERO;
        m.copy_from_slice(chunk);
        state.absorb_block(&m);
    }
    state.absorb_tail(head);

    log::trace!(
        "streebog: folded {} full block(s) and a {}-byte head",
        full_blocks,
        head.len()
    );

    let h = state.finish();
    state.reset();
    h
}
