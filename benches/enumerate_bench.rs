//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use enumerate::{over, try_over};

fn benchmark_enumeration(c: &mut Criterion) {
    let items: Vec<u64> = (0..10_000).collect();

    c.bench_function("over_n=10000", |b| {
        b.iter(|| {
            let mut acc = 0u64;
            over(black_box(&items), |item, i| acc = acc.wrapping_add(item ^ i as u64));
            black_box(acc)
        });
    });

    c.bench_function("manual_counter_n=10000", |b| {
        b.iter(|| {
            let mut acc = 0u64;
            let mut i = 0usize;
            for item in black_box(&items) {
                acc = acc.wrapping_add(item ^ i as u64);
                i += 1;
            }
            black_box(acc)
        });
    });

    c.bench_function("try_over_n=10000", |b| {
        b.iter(|| {
            let mut acc = 0u64;
            let visited = try_over(black_box(&items), |item, i| {
                acc = acc.wrapping_add(item ^ i as u64);
                Ok::<(), ()>(())
            });
            black_box((acc, visited))
        });
    });
}

criterion_group!(benches, benchmark_enumeration);
criterion_main!(benches);
