//! Compression Function `g_N`
//!
//! Miyaguchi-Preneel style: the chaining value, masked with `N` and passed
//! through `lps`, keys `E`. The old chaining value and the message block are
//! both fed forward into the cipher output.

use crate::kernels::cipher::encrypt;
use crate::kernels::constants::Block;
use crate::kernels::transform::{lps, xor, xor_in_place};

/// `g_N(N, h, m) = E(LPS(h ^ N), m) ^ h ^ m`.
#[must_use]
pub fn compress(n: &Block, h: &Block, m: &Block) -> Block {
    let mut key = xor(h, n);
    lps(&mut key);

    let mut out = encrypt(&key, m);
    xor_in_place(&mut out, h);
    xor_in_place(&mut out, m);
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::kernels::constants::{IV_512, STATE_SIZE, ZERO};

    #[test]
    fn test_first_compression_of_empty_message() {
        // Padded empty block: 63 zero bytes then the 0x01 marker.
        let mut m = ZERO;
        m[STATE_SIZE - 1] = 0x01;

        let expected = hex::decode(
            "ae9e6751f6fc67c72a0256e7095357f80b040599a4dad6ca2096c56de2d05e39\
             9d04abddb53ce850aae44685231ede380963ba6c8c4900a40368b62b33893cda",
        )
        .unwrap();
        assert_eq!(compress(&ZERO, &IV_512, &m).as_slice(), expected.as_slice());
    }

    #[test]
    fn test_mask_changes_output() {
        let m = [0x42u8; STATE_SIZE];
        let mut n = ZERO;
        n[STATE_SIZE - 2] = 0x02; // N = 512
        assert_ne!(compress(&ZERO, &IV_512, &m), compress(&n, &IV_512, &m));
    }
}
