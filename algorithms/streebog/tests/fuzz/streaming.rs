use bolero::check;
use streebog::{hash, Hasher, Variant};

#[test]
fn fuzz_streaming_consistency() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        // =============================================================================
        // BASELINE (ONE-SHOT)
        // =============================================================================
        let expected = hash(data, Variant::Streebog512);

        // =============================================================================
        // STREAMING VARIATIONS
        // =============================================================================

        // 1. Single Update
        let mut hasher = Hasher::new(Variant::Streebog512);
        hasher.update(data);
        assert_eq!(
            hasher.digest(),
            expected,
            "Streaming single update mismatch"
        );

        // 2. Byte-by-Byte (Small Inputs Only), reusing the same context
        if data.len() < 256 {
            for b in data {
                hasher.update(&[*b]);
            }
            assert_eq!(hasher.digest(), expected, "Byte-by-byte streaming mismatch");
        }

        // 3. Arbitrary Split Points
        if data.len() > 1 {
            for split_idx in [1, data.len() / 2, data.len() - 1] {
                let mut hasher = Hasher::new(Variant::Streebog512);
                let (first, second) = data.split_at(split_idx);
                hasher.update(first);
                hasher.update(second);
                assert_eq!(hasher.digest(), expected, "Split at {split_idx} mismatch");
            }
        }
    });
}
