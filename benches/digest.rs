use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use shakit::{Sha224Hasher, Sha256Hasher, Sha384Hasher, Sha512Hasher};

const SIZES: [(usize, &str); 3] = [(64, "64b"), (1024, "1kb"), (64 * 1024, "64kb")];

fn bench_narrow(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha256");

    for (size, label) in SIZES {
        let data = vec![0xA5u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(format!("digest_{label}"), |b| {
            b.iter(|| {
                black_box(Sha256Hasher::digest(black_box(&data)));
            });
        });
    }

    let data = vec![0xA5u8; 1024];
    group.throughput(Throughput::Bytes(1024));
    group.bench_function("sha224_digest_1kb", |b| {
        b.iter(|| {
            black_box(Sha224Hasher::digest(black_box(&data)));
        });
    });

    group.finish();
}

fn bench_wide(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha512");

    for (size, label) in SIZES {
        let data = vec![0xA5u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(format!("digest_{label}"), |b| {
            b.iter(|| {
                black_box(Sha512Hasher::digest(black_box(&data)));
            });
        });
    }

    let data = vec![0xA5u8; 1024];
    group.throughput(Throughput::Bytes(1024));
    group.bench_function("sha384_digest_1kb", |b| {
        b.iter(|| {
            black_box(Sha384Hasher::digest(black_box(&data)));
        });
    });

    group.finish();
}

fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("streaming");

    // Odd chunk size keeps the partial-block path busy.
    let data = vec![0x3Cu8; 64 * 1024];
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("sha256_chunks_of_37", |b| {
        b.iter(|| {
            let mut hasher = Sha256Hasher::new();
            for chunk in data.chunks(37) {
                hasher.update(chunk);
            }
            black_box(hasher.finalize());
        });
    });
    group.bench_function("sha512_chunks_of_37", |b| {
        b.iter(|| {
            let mut hasher = Sha512Hasher::new();
            for chunk in data.chunks(37) {
                hasher.update(chunk);
            }
            black_box(hasher.finalize());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_narrow, bench_wide, bench_streaming);
criterion_main!(benches);
