use criterion::{Criterion, Throughput};
use libconvo::agent::base64::{basic_auth_header, encode_into, encoded_len};
use std::hint::black_box;

pub fn bench_basic_auth(c: &mut Criterion) {
    let key = "0123456789abcdef0123456789abcdef";
    let secret = "fedcba9876543210fedcba9876543210";

    let mut group = c.benchmark_group("base64");
    group.throughput(Throughput::Bytes((key.len() + secret.len() + 1) as u64));
    group.bench_function("basic_auth_header", |b| {
        b.iter(|| basic_auth_header(black_box(key), black_box(secret)).expect("credentials fit"))
    });

    let input = [0x5au8; 96];
    let mut out = [0u8; encoded_len(96) + 1];
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("encode_into", |b| {
        b.iter(|| {
            encode_into(black_box(&input), &mut out)
                .expect("output fits")
                .len()
        })
    });
    group.finish();
}
