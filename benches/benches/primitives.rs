//! Primitive Benchmark
//!
//! Cost of each layer of the compression function on a single block.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;
use streebog::kernels::{arith, cipher, compress, constants::BLOCK_SIZE, transform};

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("Streebog Primitives");
    group.throughput(Throughput::Bytes(BLOCK_SIZE as u64));

    let mut block = [0u8; BLOCK_SIZE];
    for (i, b) in block.iter_mut().enumerate() {
        *b = (i * 7) as u8;
    }
    let key = [0x5Au8; BLOCK_SIZE];

    // S, P and L separately, then fused
    group.bench_function("S", |b| {
        b.iter(|| {
            let mut s = black_box(block);
            transform::substitute(&mut s);
            s
        });
    });
    group.bench_function("P", |b| {
        b.iter(|| {
            let mut s = black_box(block);
            transform::permute(&mut s);
            s
        });
    });
    group.bench_function("L", |b| {
        b.iter(|| {
            let mut s = black_box(block);
            transform::linear(&mut s);
            s
        });
    });
    group.bench_function("LPS", |b| {
        b.iter(|| {
            let mut s = black_box(block);
            transform::lps(&mut s);
            s
        });
    });

    // 12 rounds with and without the key schedule
    group.bench_function("key-schedule", |b| {
        b.iter(|| cipher::key_schedule(black_box(&key)));
    });
    group.bench_function("E", |b| {
        b.iter(|| cipher::encrypt(black_box(&key), black_box(&block)));
    });
    group.bench_function("g_N", |b| {
        b.iter(|| compress::compress(black_box(&key), black_box(&key), black_box(&block)));
    });

    group.bench_function("sigma-add", |b| {
        b.iter(|| {
            let mut acc = black_box(key);
            arith::add_block(&mut acc, black_box(&block));
            acc
        });
    });
    group.finish();
}

criterion_group!(benches, bench_primitives);
criterion_main!(benches);
