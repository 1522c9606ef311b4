//! Signing throughput benchmarks
//!
//! Measures single-buffer signing across input sizes and permutation counts,
//! and batch signing of many function-sized buffers.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use catalog1::core::config::SignerConfig;
use catalog1::signature::Signer;

/// Deterministic pseudo-random bytes
fn generate_buffer(len: usize, seed: u64) -> Vec<u8> {
    let mut state = seed | 1;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state as u8
        })
        .collect()
}

fn benchmark_sign_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("sign_sizes");
    let signer = Signer::shared();

    for &len in &[16usize, 240, 4096, 65536] {
        let data = generate_buffer(len, len as u64);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &data, |b, data| {
            b.iter(|| signer.sign(black_box(data)).unwrap())
        });
    }

    group.finish();
}

fn benchmark_sign_perms(c: &mut Criterion) {
    let mut group = c.benchmark_group("sign_perms");
    let data = generate_buffer(240, 7);

    for &num_perms in &[16usize, 32, 64, 128] {
        let signer = Signer::new(&SignerConfig::with_num_perms(num_perms)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(num_perms), &data, |b, data| {
            b.iter(|| signer.sign(black_box(data)).unwrap())
        });
    }

    group.finish();
}

fn benchmark_sign_batch(c: &mut Criterion) {
    // 0xf0 functions of 0xf0 bytes each
    let buffers: Vec<Vec<u8>> = (0..0xf0u64).map(|i| generate_buffer(0xf0, i)).collect();
    let signer = Signer::shared();

    c.bench_function("sign_batch_240x240", |b| {
        b.iter(|| signer.sign_batch(black_box(&buffers)))
    });
}

criterion_group!(
    benches,
    benchmark_sign_sizes,
    benchmark_sign_perms,
    benchmark_sign_batch
);
criterion_main!(benches);
