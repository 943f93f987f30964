use criterion::{black_box, criterion_group, criterion_main, Criterion};
use treesum_utils::NormalisedPath;

fn bench_normalise(c: &mut Criterion) {
    c.bench_function("normalise_backslashes", |b| {
        b.iter(|| NormalisedPath::normalise(black_box(r"  ..\testdata\test1\subfolder1\testfile.txt  ")))
    });

    c.bench_function("normalise_home", |b| {
        b.iter(|| NormalisedPath::normalise(black_box("~/Documents/projects/./treesum/")))
    });
}

criterion_group!(benches, bench_normalise);
criterion_main!(benches);
