use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use aes_core::{encrypt_block, expand_key, AesKey};
use aes_modes::{Chaining, Cipher};

fn bench_key_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_schedule");
    for len in [16usize, 24, 32] {
        let key = AesKey::try_from(vec![0x2bu8; len].as_slice()).expect("valid key length");
        group.bench_with_input(BenchmarkId::from_parameter(len * 8), &key, |b, key| {
            b.iter(|| expand_key(key));
        });
    }
    group.finish();
}

fn bench_block(c: &mut Criterion) {
    let round_keys = expand_key(&AesKey::from([0u8; 16]));
    let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
    let mut block = [0u8; 16];
    rng.fill_bytes(&mut block);

    c.bench_function("aes128_encrypt_block", |b| {
        b.iter(|| encrypt_block(&block, &round_keys));
    });
}

fn bench_chaining(c: &mut Criterion) {
    let cipher = Cipher::new(&[0u8; 16], false).expect("valid key length");
    let mut rng = ChaCha20Rng::from_seed([4u8; 32]);
    let mut message = vec![0u8; 4096];
    rng.fill_bytes(&mut message);

    let mut group = c.benchmark_group("chaining");
    group.throughput(Throughput::Bytes(message.len() as u64));
    group.sample_size(20);
    for (name, mode) in [("ecb", Chaining::Ecb), ("cbc", Chaining::Cbc)] {
        group.bench_function(name, |b| {
            b.iter(|| cipher.encrypt(&message, mode));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_key_schedule, bench_block, bench_chaining);
criterion_main!(benches);
