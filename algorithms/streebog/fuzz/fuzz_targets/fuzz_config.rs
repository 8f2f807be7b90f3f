#![no_main]

use libfuzzer_sys::fuzz_target;
use streebog::{Config, ConfigError, Hasher, Variant, IV_256, IV_512};

fuzz_target!(|data: &[u8]| {
    // =============================================================================
    // IV VALIDATION
    // =============================================================================

    match Config::from_iv(data) {
        Ok(config) => {
            assert!(data == &IV_512[..] || data == &IV_256[..]);
            assert_eq!(config.iv().as_slice(), data);
        }
        Err(ConfigError::IvLength { actual }) => assert_eq!(actual, data.len()),
        Err(ConfigError::UnknownIv) => {
            assert_eq!(data.len(), 64);
            assert!(data != &IV_512[..] && data != &IV_256[..]);
        }
        Err(e) => panic!("unexpected error: {e}"),
    }

    // =============================================================================
    // DIGEST SIZE SELECTION
    // =============================================================================

    if data.len() >= 2 {
        let bits = u16::from_be_bytes([data[0], data[1]]);
        match Variant::from_bits(bits) {
            Ok(variant) => {
                assert_eq!(variant.bits(), bits);
                let hasher = Hasher::new(variant);
                assert_eq!(hasher.output_size() * 8, usize::from(bits));
            }
            Err(e) => assert_eq!(e, ConfigError::UnsupportedBits { bits }),
        }
    }
});
