//! Streaming Hasher
//!
//! Incremental `update` / `digest` interface. Input is buffered until
//! finalization because blocks are consumed from the end of the message.

use core::{fmt, mem};

use crate::engine::{digest_message, state::ChainState};
use crate::types::{Config, ConfigError, HashOutput, Variant};

#[cfg(feature = "digest-trait")]
use crypto_common::BlockSizeUser;
#[cfg(feature = "digest-trait")]
use digest::typenum::{U32, U64};
#[cfg(feature = "digest-trait")]
use digest::Output;
#[cfg(feature = "digest-trait")]
use digest::{FixedOutput, FixedOutputReset, HashMarker, OutputSizeUser, Reset, Update};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// =============================================================================
// STREAMING HASHER
// =============================================================================

/// Streebog hashing context.
///
/// Owns the message buffer and the chaining state. `digest` returns the
/// hash and leaves the context ready for the next message with the same IV.
#[derive(Clone)]
pub struct StreebogHasher {
    /// Every byte supplied since the last digest/reset
    buffer: Vec<u8>,
    /// `h`, `N` and `Sigma`
    state: ChainState,
    config: Config,
}

impl StreebogHasher {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Create a hasher for `variant` with its standard IV.
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        Self::with_config(Config::new(variant))
    }

    /// Create a hasher from a validated configuration.
    #[must_use]
    pub const fn with_config(config: Config) -> Self {
        Self {
            buffer: Vec::new(),
            state: ChainState::new(*config.iv()),
            config,
        }
    }

    /// Create a hasher from raw IV bytes.
    ///
    /// # Errors
    /// Returns `ConfigError` if the IV has the wrong length or is not one of
    /// the standard IVs.
    pub fn from_iv(iv: &[u8]) -> Result<Self, ConfigError> {
        Config::from_iv(iv).map(Self::with_config)
    }

    // =========================================================================
    // STATE MODIFICATION
    // =========================================================================

    /// Append `data` to the message. No hashing happens until `digest`.
    pub fn update(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    /// Hash everything supplied so far, then reset.
    ///
    /// The message buffer is freed once hashed.
    ///
    /// A second call without an intervening `update` returns the hash of
    /// the empty message.
    pub fn digest(&mut self) -> HashOutput {
        let message = mem::take(&mut self.buffer);
        let h = digest_message(&mut self.state, &message);
        HashOutput::from_state(h, self.config.variant())
    }

    /// Consuming form of `digest`.
    #[must_use]
    pub fn finalize(mut self) -> HashOutput {
        self.digest()
    }

    /// Drop buffered input and counters without producing output.
    ///
    /// The buffer's allocation is released as well.
    pub fn reset(&mut self) {
        self.buffer = Vec::new();
        self.state.reset();
    }

    // =========================================================================
    // INSPECTION
    // =========================================================================

    /// The variant this hasher produces.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.config.variant()
    }

    /// Digest size in bytes.
    #[must_use]
    pub const fn output_size(&self) -> usize {
        self.config.variant().output_size()
    }

    /// Bytes waiting for the next `digest`.
    #[must_use]
    pub const fn buffered_len(&self) -> usize {
        self.buffer.len()
    }
}

// =============================================================================
// TRAIT IMPL
// =============================================================================

impl Default for StreebogHasher {
    fn default() -> Self {
        Self::new(Variant::default())
    }
}

impl fmt::Debug for StreebogHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreebogHasher")
            .field("variant", &self.config.variant())
            .field("buffered", &self.buffer.len())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// DIGEST TRAIT WRAPPERS
// =============================================================================

/// Streebog-512 implementing the `digest` crate traits.
#[cfg(feature = "digest-trait")]
#[derive(Clone, Debug)]
pub struct Streebog512(StreebogHasher);

/// Streebog-256 implementing the `digest` crate traits.
#[cfg(feature = "digest-trait")]
#[derive(Clone, Debug)]
pub struct Streebog256(StreebogHasher);

#[cfg(feature = "digest-trait")]
impl Default for Streebog512 {
    fn default() -> Self {
        Self(StreebogHasher::new(Variant::Streebog512))
    }
}

#[cfg(feature = "digest-trait")]
impl Default for Streebog256 {
    fn default() -> Self {
        Self(StreebogHasher::new(Variant::Streebog256))
    }
}

#[cfg(feature = "digest-trait")]
impl OutputSizeUser for Streebog512 {
    type OutputSize = U64;
}

#[cfg(feature = "digest-trait")]
impl OutputSizeUser for Streebog256 {
    type OutputSize = U32;
}

#[cfg(feature = "digest-trait")]
impl BlockSizeUser for Streebog512 {
    type BlockSize = U64;
}

#[cfg(feature = "digest-trait")]
impl BlockSizeUser for Streebog256 {
    type BlockSize = U64;
}

#[cfg(feature = "digest-trait")]
impl Update for Streebog512 {
    fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }
}

#[cfg(feature = "digest-trait")]
impl Update for Streebog256 {
    fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }
}

#[cfg(feature = "digest-trait")]
impl FixedOutput for Streebog512 {
    fn finalize_into(mut self, out: &mut Output<Self>) {
        out.copy_from_slice(self.0.digest().as_bytes());
    }
}

#[cfg(feature = "digest-trait")]
impl FixedOutput for Streebog256 {
    fn finalize_into(mut self, out: &mut Output<Self>) {
        out.copy_from_slice(self.0.digest().as_bytes());
    }
}

#[cfg(feature = "digest-trait")]
impl FixedOutputReset for Streebog512 {
    fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
        out.copy_from_slice(self.0.digest().as_bytes());
    }
}

#[cfg(feature = "digest-trait")]
impl FixedOutputReset for Streebog256 {
    fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
        out.copy_from_slice(self.0.digest().as_bytes());
    }
}

#[cfg(feature = "digest-trait")]
impl Reset for Streebog512 {
    fn reset(&mut self) {
        self.0.reset();
    }
}

#[cfg(feature = "digest-trait")]
impl Reset for Streebog256 {
    fn reset(&mut self) {
        self.0.reset();
    }
}

#[cfg(feature = "digest-trait")]
impl HashMarker for Streebog512 {}

#[cfg(feature = "digest-trait")]
impl HashMarker for Streebog256 {}
