use weakcrypto::{crc32, factor_modulus, forge_frame, wep_encrypt, Config};

use criterion::{criterion_group, criterion_main, Criterion};

pub fn bench_crc32(c: &mut Criterion) {
    let data = vec![0xa5u8; 4096];
    c.bench_function("crc32_4k", |b| b.iter(|| crc32(&data)));
}

pub fn bench_forge_frame(c: &mut Criterion) {
    let keystream = vec![0x3cu8; 64];
    let ciphertext = wep_encrypt(b"Hello, world!", &keystream).unwrap();
    c.bench_function("forge_frame", |b| {
        b.iter(|| forge_frame(&ciphertext, b"Hello, world!", b"Howdy partner"))
    });
}

pub fn bench_factor_modulus(c: &mut Criterion) {
    let n = Config::default().fermat.modulus;
    c.bench_function("factor_modulus_1024", |b| b.iter(|| factor_modulus(&n, None)));
}

criterion_group!(benches, bench_crc32, bench_forge_frame, bench_factor_modulus);
criterion_main!(benches);
