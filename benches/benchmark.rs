//! Benchmarks for Enhanced TEA cipher operations.
//!
//! Measures single-block encrypt/decrypt throughput, payload-size scaling
//! across the reference test sizes, and the analysis probes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use enhanced_tea::{avalanche_test, differential_test, feistel, EnhancedTea, RoundKeyLedger};

/// Key used consistently across all benchmarks.
const BENCH_KEY: &[u8; 16] = b"0123456789abcdef";

/// Block size in bytes (64-bit block).
const BLOCK_SIZE_BYTES: u64 = 8;

/// Benchmarks single-block encryption including the SHA-256 schedule
/// derivation and ledger append.
fn bench_encrypt_block(c: &mut Criterion) {
    let cipher = EnhancedTea::new(BENCH_KEY).unwrap();
    let key_words = cipher.key_words();

    let mut group = c.benchmark_group("encrypt_single_block");
    group.throughput(Throughput::Bytes(BLOCK_SIZE_BYTES));

    group.bench_function("32_rounds", |b| {
        let block = *b"ABCDEFGH";
        b.iter(|| {
            let mut ledger = RoundKeyLedger::new();
            feistel::encrypt_block(black_box(&block), &key_words, &mut ledger)
        });
    });

    group.finish();
}

/// Benchmarks single-block decryption, which skips hashing entirely and
/// runs the pure arithmetic inverse.
fn bench_decrypt_block(c: &mut Criterion) {
    let cipher = EnhancedTea::new(BENCH_KEY).unwrap();
    let key_words = cipher.key_words();
    let mut ledger = RoundKeyLedger::new();
    let ciphertext = feistel::encrypt_block(b"ABCDEFGH", &key_words, &mut ledger);

    let mut group = c.benchmark_group("decrypt_single_block");
    group.throughput(Throughput::Bytes(BLOCK_SIZE_BYTES));

    group.bench_function("32_rounds", |b| {
        let round_keys = ledger.block(0).unwrap();
        b.iter(|| feistel::decrypt_block(black_box(&ciphertext), round_keys));
    });

    group.finish();
}

/// Benchmarks full-message encryption across the reference payload sizes
/// (8 to 1024 bytes).
fn bench_encrypt_payload_scaling(c: &mut Criterion) {
    let cipher = EnhancedTea::new(BENCH_KEY).unwrap();
    let payload_sizes: &[usize] = &[8, 16, 32, 64, 128, 256, 512, 1024];

    let mut group = c.benchmark_group("encrypt_payload_scaling");
    for &size in payload_sizes {
        let payload = vec![0xA5u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &payload, |b, payload| {
            b.iter(|| cipher.encrypt(black_box(payload)));
        });
    }

    group.finish();
}

/// Benchmarks full-message decryption of a 1 KiB ciphertext.
fn bench_decrypt_payload(c: &mut Criterion) {
    let cipher = EnhancedTea::new(BENCH_KEY).unwrap();
    let payload = vec![0xA5u8; 1024];
    let (ciphertext, ledger) = cipher.encrypt(&payload);

    let mut group = c.benchmark_group("decrypt_payload");
    group.throughput(Throughput::Bytes(1024));

    group.bench_function("1024_bytes", |b| {
        b.iter(|| cipher.decrypt(black_box(&ciphertext), &ledger).unwrap());
    });

    group.finish();
}

/// Benchmarks one avalanche measurement (two block encryptions plus the
/// Hamming distance).
fn bench_avalanche(c: &mut Criterion) {
    let cipher = EnhancedTea::new(BENCH_KEY).unwrap();

    c.bench_function("avalanche_single_bit", |b| {
        b.iter(|| avalanche_test(&cipher, black_box(b"AvalTest"), black_box(3)).unwrap());
    });
}

/// Benchmarks a 100-pair differential tabulation.
fn bench_differential(c: &mut Criterion) {
    let cipher = EnhancedTea::new(BENCH_KEY).unwrap();

    c.bench_function("differential_100_pairs", |b| {
        b.iter(|| differential_test(&cipher, black_box(0x0000_0001), 100));
    });
}

criterion_group!(
    benches,
    bench_encrypt_block,
    bench_decrypt_block,
    bench_encrypt_payload_scaling,
    bench_decrypt_payload,
    bench_avalanche,
    bench_differential,
);
criterion_main!(benches);
