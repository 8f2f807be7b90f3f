//! Streebog Kernels
//!
//! Portable, table-driven building blocks of the hash: constants, the LPS
//! transform, the block cipher `E`, the compression function `g_N` and the
//! 512-bit accumulator arithmetic.

pub mod arith;
pub mod cipher;
pub mod compress;
pub mod constants;
pub mod transform;
