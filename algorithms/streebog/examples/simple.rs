//! Streebog Basic Example
//!
//! Minimal usage: `let digest = streebog::hash_512(&data);`

#![allow(clippy::pedantic, clippy::nursery)]

use streebog::{Hasher, Variant};

fn main() {
    let data = b"Hello, World!";

    println!("Data:       {:?}", String::from_utf8_lossy(data));
    println!("Streebog-512: {}", hex::encode(streebog::hash_512(data)));
    println!("Streebog-256: {}", hex::encode(streebog::hash_256(data)));

    // Streaming: the same context can be reused after each digest.
    let mut hasher = Hasher::new(Variant::Streebog256);
    hasher.update(b"Hello, ");
    hasher.update(b"World!");
    println!("Streamed:     {:x}", hasher.digest());
}
