//! Diffusion Tests
//!
//! Coarse avalanche and sensitivity checks. These are sanity checks on the
//! implementation, not statistical proofs.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_lossless)]

use streebog::{hash, hash_512, Variant};

fn flipped_bits(a: &[u8], b: &[u8]) -> u32 {
    a.iter().zip(b).map(|(x, y)| (x ^ y).count_ones()).sum()
}

// =============================================================================
// AVALANCHE
// =============================================================================

#[test]
fn test_single_bit_avalanche() {
    for variant in [Variant::Streebog256, Variant::Streebog512] {
        let out_bits = (variant.output_size() * 8) as f64;
        let base_input = vec![0x5Au8; 100];
        let base = hash(&base_input, variant);

        let mut total = 0u64;
        let mut samples = 0u64;
        for byte in [0usize, 1, 35, 36, 37, 63, 99] {
            for bit in 0..8 {
                let mut input = base_input.clone();
                input[byte] ^= 1 << bit;
                let flips = flipped_bits(base.as_bytes(), hash(&input, variant).as_bytes());

                let ratio = flips as f64 / out_bits;
                assert!(
                    (0.30..=0.70).contains(&ratio),
                    "{variant}: weak diffusion flipping byte {byte} bit {bit}: {ratio:.3}"
                );
                total += u64::from(flips);
                samples += 1;
            }
        }

        let mean = total as f64 / (samples as f64 * out_bits);
        assert!(
            (0.45..=0.55).contains(&mean),
            "{variant}: mean avalanche {mean:.3} too far from 0.5"
        );
    }
}

#[test]
fn test_avalanche_in_each_block_position() {
    // 129 bytes: a 1-byte head and two full blocks. A flip in any of the
    // three regions must reach every 64-bit word of the digest.
    let base_input = vec![0u8; 129];
    let base = hash_512(&base_input);

    for pos in [0usize, 1, 64, 65, 128] {
        let mut input = base_input.clone();
        input[pos] ^= 0x80;
        let h = hash_512(&input);

        for (w, (a, b)) in base.chunks(8).zip(h.chunks(8)).enumerate() {
            assert!(
                flipped_bits(a, b) > 0,
                "word {w} unaffected by a flip at byte {pos}"
            );
        }
    }
}

// =============================================================================
// LENGTH SENSITIVITY
// =============================================================================

#[test]
fn test_length_commitment() {
    let input = vec![0u8; 4096];
    let h_full = hash_512(&input);
    let h_half = hash_512(&input[..2048]);
    assert_ne!(h_full, h_half);
}

#[test]
fn test_large_input() {
    let large = vec![0x42u8; 1_000_000];
    let h1 = hash_512(&large);
    let h2 = hash_512(&large);
    assert_eq!(h1, h2);
    assert_ne!(h1, hash_512(&large[1..]));
}
