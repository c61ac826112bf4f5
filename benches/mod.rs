use criterion::{criterion_group, criterion_main};

mod agent;

criterion_group!(
    benches,
    agent::base64::bench_basic_auth,
    agent::request::bench_join_body,
    agent::accumulator::bench_accumulate_dynamic,
    agent::accumulator::bench_accumulate_fixed
);
criterion_main!(benches);
