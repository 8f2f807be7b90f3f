#![no_main]

use libfuzzer_sys::fuzz_target;
use streebog::{Hasher, Variant};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // Chunk size from first byte (1 to 255)
    let chunk_size = (data[0] as usize % 255) + 1;
    let msg = &data[1..];

    for variant in [Variant::Streebog256, Variant::Streebog512] {
        let expected = streebog::hash(msg, variant);

        let mut hasher = Hasher::new(variant);
        for chunk in msg.chunks(chunk_size) {
            hasher.update(chunk);
        }
        let streamed = hasher.digest();
        assert_eq!(streamed, expected, "streaming mismatch for {variant}");

        // The context is fresh after digest
        hasher.update(msg);
        assert_eq!(hasher.digest(), expected, "reuse after digest diverged");

        assert!(streebog::verify(msg, variant, expected.as_bytes()));
    }
});
