use std::hint::black_box;

use codec::{decode_packed, decode_zoned, encode_packed, encode_packed_into, encode_zoned};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

const VALUES: [i64; 4] = [0, -123, 1_234_567_890, i64::MIN];

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    for value in VALUES {
        group.bench_with_input(BenchmarkId::new("zoned", value), &value, |b, &v| {
            b.iter(|| encode_zoned(black_box(v)));
        });
        group.bench_with_input(BenchmarkId::new("packed", value), &value, |b, &v| {
            b.iter(|| encode_packed(black_box(v)));
        });
        group.bench_with_input(BenchmarkId::new("packed_into", value), &value, |b, &v| {
            let mut buf = [0u8; 10];
            b.iter(|| encode_packed_into(black_box(v), &mut buf));
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for value in VALUES {
        let zoned = encode_zoned(value);
        let packed = encode_packed(value);
        group.bench_with_input(BenchmarkId::new("zoned", value), &zoned, |b, bytes| {
            b.iter(|| decode_zoned(black_box(bytes)));
        });
        group.bench_with_input(BenchmarkId::new("packed", value), &packed, |b, bytes| {
            b.iter(|| decode_packed(black_box(bytes)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
