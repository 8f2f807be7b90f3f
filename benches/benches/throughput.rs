//! Streebog Criterion Benchmark
//!
//! Latency and throughput of both digest sizes, with SHA-512 as a baseline.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use sha2::{Digest, Sha512};
use std::hint::black_box;
use streebog::{Hasher, Variant};

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

fn random_input(size: usize) -> Vec<u8> {
    let mut input = vec![0u8; size];
    rand::rng().fill(&mut input[..]);
    input
}

// =============================================================================
// BENCHMARK 1: LATENCY
// =============================================================================

/// Small inputs, including the 63/64/65-byte block boundary.
fn bench_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Latency");

    let sizes = [
        (0, "0B"),
        (16, "16B"),
        (63, "63B"),
        (64, "64B"),
        (65, "65B"),
        (256, "256B"),
        (KB, "1KB"),
    ];

    for (size, name) in sizes {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("streebog-512", name), &input, |b, data| {
            b.iter(|| streebog::hash_512(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("streebog-256", name), &input, |b, data| {
            b.iter(|| streebog::hash_256(black_box(data)))
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: BULK
// =============================================================================

/// Throughput against SHA-512 on the same input.
fn bench_bulk(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Bulk");
    group.sample_size(30);

    let sizes = [
        (16 * KB, "16KB"),
        (256 * KB, "256KB"),
        (MB, "1MB"),
        (4 * MB, "4MB"),
    ];

    for (size, name) in sizes {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("streebog-512", name), &input, |b, data| {
            b.iter(|| streebog::hash_512(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("sha2-512", name), &input, |b, data| {
            b.iter(|| Sha512::digest(black_box(data)))
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: STREAMING
// =============================================================================

/// Incremental updates of different chunk sizes.
fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Streaming");
    group.sample_size(30);

    let test_cases = [
        (MB, 4 * KB, "1MB-4KB-chunks"),
        (MB, 64 * KB, "1MB-64KB-chunks"),
        (4 * MB, 256 * KB, "4MB-256KB-chunks"),
    ];

    for (total_size, chunk_size, name) in test_cases {
        let input = random_input(total_size);
        group.throughput(Throughput::Bytes(total_size as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &(input, chunk_size),
            |b, (data, chunk_sz)| {
                b.iter(|| {
                    let mut hasher = Hasher::new(Variant::Streebog512);
                    for chunk in data.chunks(*chunk_sz) {
                        hasher.update(black_box(chunk));
                    }
                    hasher.finalize()
                })
            },
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 4: VERIFICATION
// =============================================================================

/// Constant-time digest comparison on top of hashing.
fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("4-Verify");

    let input = random_input(4 * KB);
    group.throughput(Throughput::Bytes(input.len() as u64));

    let digest = streebog::hash_512(&input);
    group.bench_function("hash", |b| b.iter(|| streebog::hash_512(black_box(&input))));
    group.bench_function("verify", |b| {
        b.iter(|| streebog::verify(black_box(&input), Variant::Streebog512, black_box(&digest)))
    });
    group.finish();
}

// =============================================================================
// MAIN
// =============================================================================

criterion_group!(
    benches,
    bench_latency,
    bench_bulk,
    bench_streaming,
    bench_verify,
);
criterion_main!(benches);
