use criterion::{Criterion, Throughput};
use libconvo::agent::{Accumulator, SessionState};
use libconvo::network::application::http::{Event, ResponseInfo};
use std::hint::black_box;

const BODY: &[u8] = br#"{"agent_id":"1NT29X10YHxxxxxWJOXLYHNYB","create_ts":1737111452,"status":"RUNNING"}"#;

fn feed(acc: &mut Accumulator<'_>, info: &ResponseInfo) {
    for chunk in BODY.chunks(16) {
        acc.handle(Event::Data(black_box(chunk)), info).expect("data accepted");
    }
    acc.handle(Event::Finish, info).expect("body parsed");
    acc.handle(Event::Disconnected, info).expect("disconnect handled");
}

pub fn bench_accumulate_dynamic(c: &mut Criterion) {
    let info = ResponseInfo {
        status_code: 200,
        content_length: Some(BODY.len()),
        chunked: false,
    };

    let mut group = c.benchmark_group("accumulator");
    group.throughput(Throughput::Bytes(BODY.len() as u64));
    group.bench_function("dynamic", |b| {
        b.iter(|| {
            let mut session = SessionState::new("app");
            let mut acc = Accumulator::dynamic(&mut session);
            feed(&mut acc, &info);
            drop(acc);
            session
        })
    });
    group.finish();
}

pub fn bench_accumulate_fixed(c: &mut Criterion) {
    let info = ResponseInfo::default();

    let mut group = c.benchmark_group("accumulator");
    group.throughput(Throughput::Bytes(BODY.len() as u64));
    group.bench_function("fixed", |b| {
        b.iter(|| {
            let mut region = [0u8; 256];
            let mut session = SessionState::new("app");
            let mut acc = Accumulator::fixed(&mut region, &mut session);
            feed(&mut acc, &info);
            drop(acc);
            session
        })
    });
    group.finish();
}
