//! 512-bit Accumulator Arithmetic
//!
//! Big-endian unsigned addition modulo 2^512 for the length counter `N` and
//! the checksum `Sigma`. Carry runs from byte 63 toward byte 0 and the final
//! carry out of byte 0 is dropped.

use crate::kernels::constants::Block;

/// `acc = (acc + value) mod 2^512`.
///
/// Stops as soon as the value is absorbed and no carry remains.
pub fn add_small(acc: &mut Block, value: usize) {
    let mut carry = value;
    for byte in acc.iter_mut().rev() {
        if carry == 0 {
            break;
        }
        let sum = usize::from(*byte) + (carry & 0xff);
        *byte = sum.to_le_bytes()[0];
        carry = (carry >> 8) + (sum >> 8);
    }
}

/// `acc = (acc + other) mod 2^512`.
pub fn add_block(acc: &mut Block, other: &Block) {
    let mut carry = 0u16;
    for (a, b) in acc.iter_mut().zip(other).rev() {
        let sum = u16::from(*a) + u16::from(*b) + carry;
        *a = sum.to_le_bytes()[0];
        carry = sum >> 8;
    }
}
