//! Tests for the `digest` trait integration.
//!
//! Verifies that `Streebog512` / `Streebog256` implement the `Digest` trait
//! correctly and can be used in generic contexts.

#![cfg(feature = "digest-trait")]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use streebog::digest::Digest;
use streebog::{hash_256, hash_512, Streebog256, Streebog512};

fn hash_generic<D: Digest>(input: &[u8]) -> Vec<u8> {
    let mut h = D::new();
    h.update(input);
    h.finalize().to_vec()
}

#[test]
fn test_digest_trait_usage() {
    assert_eq!(
        hash_generic::<Streebog512>(b"test"),
        hash_512(b"test").to_vec()
    );
    assert_eq!(
        hash_generic::<Streebog256>(b"test"),
        hash_256(b"test").to_vec()
    );
}

#[test]
fn test_output_sizes() {
    assert_eq!(<Streebog512 as Digest>::output_size(), 64);
    assert_eq!(<Streebog256 as Digest>::output_size(), 32);
}

#[test]
fn test_chained_updates() {
    let out = Streebog512::new()
        .chain_update(b"ab")
        .chain_update(b"c")
        .finalize();
    assert_eq!(out.as_slice(), &hash_512(b"abc")[..]);
}

#[test]
fn test_finalize_reset() {
    let mut h = Streebog256::new();
    Digest::update(&mut h, b"first");
    let first = Digest::finalize_reset(&mut h);
    assert_eq!(first.as_slice(), &hash_256(b"first")[..]);

    Digest::update(&mut h, b"second");
    assert_eq!(h.finalize().as_slice(), &hash_256(b"second")[..]);
}
