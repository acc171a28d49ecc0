//! Throughput benchmarks of the hash functions and XOFs

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use ascon_hash::{AsconHash, AsconHasha, AsconXof, AsconXofa, Digest, ExtendableOutput, Update};

const KB: usize = 1024;
const SIZES: [usize; 4] = [16, KB, 4 * KB, 16 * KB];

fn bench_digest<D: Digest>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group(name);
    for size in SIZES {
        let data = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| black_box(D::digest(&data)))
        });
    }
    group.finish();
}

fn bench_xof<X: ExtendableOutput + Default + Update>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group(name);
    for size in SIZES {
        let mut out = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(BenchmarkId::new("squeeze", size), |b| {
            b.iter(|| {
                X::digest_xof(b"", &mut out);
                black_box(&out);
            })
        });
    }
    group.finish();
}

fn criterion_benchmark(c: &mut Criterion) {
    bench_digest::<AsconHash>(c, "ascon_hash");
    bench_digest::<AsconHasha>(c, "ascon_hasha");
    bench_xof::<AsconXof>(c, "ascon_xof");
    bench_xof::<AsconXofa>(c, "ascon_xofa");
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
