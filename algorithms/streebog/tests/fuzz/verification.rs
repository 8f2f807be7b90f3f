use bolero::check;
use streebog::{hash, verify, Variant};

#[test]
fn fuzz_verification_logic() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        for variant in [Variant::Streebog256, Variant::Streebog512] {
            // =============================================================================
            // POSITIVE TEST
            // =============================================================================

            let h = hash(data, variant);
            assert!(
                verify(data, variant, h.as_bytes()),
                "verify() failed on correct data"
            );

            // =============================================================================
            // NEGATIVE TESTS (CORRUPTION)
            // =============================================================================

            // 1. Data Corruption
            if !data.is_empty() {
                let mut corrupted_data = data.clone();
                corrupted_data[0] ^= 0x01;
                assert!(
                    !verify(&corrupted_data, variant, h.as_bytes()),
                    "verify() succeeded on corrupted data"
                );
            }

            // 2. Hash Corruption
            let mut bad_h = h.as_bytes().to_vec();
            bad_h[0] ^= 0xFF;
            assert!(
                !verify(data, variant, &bad_h),
                "verify() succeeded on corrupted hash"
            );

            // 3. Truncated Hash
            assert!(
                !verify(data, variant, &h.as_bytes()[1..]),
                "verify() accepted a truncated hash"
            );
        }
    });
}
