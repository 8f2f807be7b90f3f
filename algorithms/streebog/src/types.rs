//! Shared types used across the Streebog library.

use core::fmt;
#[cfg(feature = "std")]
use std::error;

use crate::kernels::constants::{Block, HASH_SIZE_256, HASH_SIZE_512, IV_256, IV_512, STATE_SIZE};

// =============================================================================
// DIGEST VARIANT
// =============================================================================

/// Digest length, selected by the initialization vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// 256-bit digest (IV = `0x01` repeated).
    Streebog256,
    /// 512-bit digest (IV = all zero).
    #[default]
    Streebog512,
}

impl Variant {
    /// Digest size in bytes.
    #[must_use]
    pub const fn output_size(self) -> usize {
        match self {
            Self::Streebog256 => HASH_SIZE_256,
            Self::Streebog512 => HASH_SIZE_512,
        }
    }

    /// Digest size in bits.
    #[must_use]
    pub const fn bits(self) -> u16 {
        match self {
            Self::Streebog256 => 256,
            Self::Streebog512 => 512,
        }
    }

    /// The standard initialization vector for this variant.
    #[must_use]
    pub const fn iv(self) -> Block {
        match self {
            Self::Streebog256 => IV_256,
            Self::Streebog512 => IV_512,
        }
    }

    /// Look up a variant by digest size in bits.
    ///
    /// # Errors
    /// Returns `ConfigError::UnsupportedBits` for anything but 256 or 512.
    pub fn from_bits(bits: u16) -> Result<Self, ConfigError> {
        match bits {
            256 => Ok(Self::Streebog256),
            512 => Ok(Self::Streebog512),
            _ => {
                log::debug!("streebog: rejecting digest size of {bits} bits");
                Err(ConfigError::UnsupportedBits { bits })
            }
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Streebog-{}", self.bits())
    }
}

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Hasher configuration: the IV and the variant it selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    iv: Block,
    variant: Variant,
}

impl Config {
    /// Configuration for `variant` with its standard IV.
    #[must_use]
    pub const fn new(variant: Variant) -> Self {
        Self {
            iv: variant.iv(),
            variant,
        }
    }

    /// Build a configuration from raw IV bytes.
    ///
    /// The IV must be exactly 64 bytes and equal to one of the two standard
    /// IVs; the match decides the variant.
    ///
    /// # Errors
    /// Returns `ConfigError::IvLength` for a wrong-length IV and
    /// `ConfigError::UnknownIv` for a 64-byte value that is neither IV.
    pub fn from_iv(iv: &[u8]) -> Result<Self, ConfigError> {
        let iv: Block = iv.try_into().map_err(|_| {
            log::debug!("streebog: rejecting IV of {} bytes", iv.len());
            ConfigError::IvLength { actual: iv.len() }
        })?;

        [Variant::Streebog512, Variant::Streebog256]
            .into_iter()
            .find(|v| v.iv() == iv)
            .map(Self::new)
            .ok_or_else(|| {
                log::debug!("streebog: rejecting non-standard IV");
                ConfigError::UnknownIv
            })
    }

    /// The initialization vector.
    #[must_use]
    pub const fn iv(&self) -> &Block {
        &self.iv
    }

    /// The selected variant.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Variant::default())
    }
}

// =============================================================================
// OUTPUT
// =============================================================================

/// A finished digest: 64 or 32 bytes depending on the variant.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashOutput {
    bytes: Block,
    len: usize,
}

impl HashOutput {
    /// Cut the final chaining value down to `variant`'s size.
    ///
    /// The 256-bit digest is the most significant half of `h`, i.e. its
    /// first 32 bytes in big-endian order.
    pub(crate) fn from_state(h: Block, variant: Variant) -> Self {
        let len = variant.output_size();
        let mut bytes = [0u8; STATE_SIZE];
        bytes[..len].copy_from_slice(&h[..len]);
        Self { bytes, len }
    }

    /// Digest bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Digest size in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// `true` if the digest holds no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl AsRef<[u8]> for HashOutput {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq<[u8]> for HashOutput {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl fmt::LowerHex for HashOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.as_bytes() {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for HashOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HashOutput({self:x})")
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Invalid hasher configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The IV is not 64 bytes long.
    IvLength {
        /// Length that was supplied.
        actual: usize,
    },
    /// The IV is 64 bytes but matches neither standard IV.
    UnknownIv,
    /// The requested digest size is neither 256 nor 512 bits.
    UnsupportedBits {
        /// Size that was requested.
        bits: u16,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IvLength { actual } => write!(
                f,
                "IV must be {STATE_SIZE} bytes, got {actual}"
            ),
            Self::UnknownIv => write!(
                f,
                "IV matches neither standard Streebog IV (all 0x00 for 512-bit, all 0x01 for 256-bit)"
            ),
            Self::UnsupportedBits { bits } => write!(
                f,
                "unsupported digest size {bits} bits. Supported: 256, 512"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for ConfigError {}
