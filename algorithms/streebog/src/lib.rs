#![cfg_attr(not(feature = "std"), no_std)]

//! # Streebog
//!
//! GOST R 34.11-2012 hash function with 512-bit and 256-bit digests.
//!
//! Input bytes are read as a big-endian number, exactly as written in the
//! standard: the last byte supplied is the least significant one.

//! # Usage
//! ```rust
//! use streebog::{Hasher, Variant};
//!
//! // 1. One-shot
//! let digest = streebog::hash_512(b"message");
//! assert_eq!(digest.len(), 64);
//!
//! // 2. Verification
//! assert!(streebog::verify(b"message", Variant::Streebog512, &digest));
//!
//! // 3. Streaming
//! let mut hasher = Hasher::new(Variant::Streebog256);
//! hasher.update(b"mess");
//! hasher.update(b"age");
//! assert_eq!(hasher.digest().as_bytes(), &streebog::hash_256(b"message")[..]);
//!
//! // 4. Explicit IV
//! let hasher = Hasher::from_iv(&[0x01; 64])?;
//! assert_eq!(hasher.variant(), Variant::Streebog256);
//! # Ok::<(), streebog::ConfigError>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

#[cfg(not(feature = "std"))]
extern crate alloc;

mod engine;
// Re-export internal kernels for benchmarking/testing, but hide from docs
#[doc(hidden)]
pub mod kernels;
mod oneshot;
mod streaming;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

#[cfg(feature = "digest-trait")]
pub use digest;
pub use kernels::constants::{HASH_SIZE_256, HASH_SIZE_512, IV_256, IV_512};
pub use oneshot::{hash, hash_256, hash_512, verify};
pub use streaming::StreebogHasher as Hasher;
#[cfg(feature = "digest-trait")]
pub use streaming::{Streebog256, Streebog512};
pub use types::{Config, ConfigError, HashOutput, Variant};
