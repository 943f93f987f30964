use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use treesum_hash::hasher::StreamHasher;
use treesum_hash::hex::hex_to_string;
use treesum_hash::HashAlgorithm;

fn hash_throughput(c: &mut Criterion) {
    let data = vec![0xABu8; 1024 * 1024]; // 1 MiB

    let mut group = c.benchmark_group("hash_throughput");
    group.throughput(Throughput::Bytes(data.len() as u64));

    for algo in HashAlgorithm::ALL {
        group.bench_function(format!("{algo}_1mib"), |b| {
            b.iter(|| StreamHasher::digest(black_box(algo), black_box(&data)))
        });
    }

    group.finish();
}

fn hex_encode(c: &mut Criterion) {
    let bytes = [0xABu8; 64];

    c.bench_function("hex_encode_64bytes", |b| {
        b.iter(|| hex_to_string(black_box(&bytes)))
    });
}

criterion_group!(benches, hash_throughput, hex_encode);
criterion_main!(benches);
