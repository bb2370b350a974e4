//! Throughput Benchmark for authstore
//!
//! This benchmark measures the key codec, the expiry policy, and adapter
//! operations against the in-memory backend.

use authstore::expiry::{epoch_ms, plan_write};
use authstore::key::{join_key, split_key};
use authstore::store::{MemoryBackend, StorageAdapter};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use futures::StreamExt;
use serde_json::json;
use std::time::{Duration, SystemTime};
use tokio::runtime::Runtime;

/// Benchmark key join/split round trips
fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    group.throughput(Throughput::Elements(1));

    group.bench_function("join_two_segments", |b| {
        b.iter(|| {
            black_box(join_key(&["users", "123"]).unwrap());
        });
    });

    group.bench_function("join_five_segments", |b| {
        let segments = ["oauth:refresh", "client-1", "user-42", "device", "0"];
        b.iter(|| {
            black_box(join_key(&segments).unwrap());
        });
    });

    group.bench_function("split", |b| {
        let flat = join_key(&["oauth:refresh", "client-1", "user-42"]).unwrap();
        b.iter(|| {
            black_box(split_key(&flat));
        });
    });

    group.finish();
}

/// Benchmark the TTL reconciliation decision
fn bench_policy(c: &mut Criterion) {
    let mut group = c.benchmark_group("policy");
    group.throughput(Throughput::Elements(1));

    let now = epoch_ms(SystemTime::now());

    group.bench_function("plan_short_ttl", |b| {
        b.iter(|| {
            black_box(plan_write(Some(now + 16_000), now));
        });
    });

    group.bench_function("plan_long_ttl", |b| {
        b.iter(|| {
            black_box(plan_write(Some(now + 3_600_000), now));
        });
    });

    group.finish();
}

/// Benchmark adapter operations against the in-memory backend
fn bench_adapter(c: &mut Criterion) {
    let runtime = Runtime::new().unwrap();
    let adapter = StorageAdapter::new(MemoryBackend::new());

    runtime.block_on(async {
        for i in 0..10_000 {
            let id = format!("{i}");
            adapter
                .set(&["users", id.as_str()], &json!({"id": i}), None)
                .await
                .unwrap();
        }
    });

    let mut group = c.benchmark_group("adapter");
    group.throughput(Throughput::Elements(1));

    group.bench_function("get_existing", |b| {
        let mut i = 0u64;
        b.iter(|| {
            let id = format!("{}", i % 10_000);
            let record = runtime.block_on(adapter.get(&["users", id.as_str()]));
            black_box(record.unwrap());
            i += 1;
        });
    });

    group.bench_function("get_missing", |b| {
        let mut i = 0u64;
        b.iter(|| {
            let id = format!("missing:{i}");
            let record = runtime.block_on(adapter.get(&["users", id.as_str()]));
            black_box(record.unwrap());
            i += 1;
        });
    });

    group.bench_function("set_with_short_expiry", |b| {
        let mut i = 0u64;
        b.iter(|| {
            let id = format!("code:{i}");
            let expiry = SystemTime::now() + Duration::from_secs(16);
            runtime
                .block_on(adapter.set(&["codes", id.as_str()], &json!({"grant": i}), Some(expiry)))
                .unwrap();
            i += 1;
        });
    });

    group.finish();
}

/// Benchmark a full prefix scan across pages
fn bench_scan(c: &mut Criterion) {
    let runtime = Runtime::new().unwrap();
    let adapter = StorageAdapter::new(MemoryBackend::with_page_size(100));

    runtime.block_on(async {
        for i in 0..1_000 {
            let id = format!("{i:04}");
            adapter
                .set(&["sessions", id.as_str()], &json!({"id": i}), None)
                .await
                .unwrap();
        }
    });

    let mut group = c.benchmark_group("scan");
    group.throughput(Throughput::Elements(1_000));

    group.bench_function("scan_1000_across_pages", |b| {
        b.iter(|| {
            let count = runtime.block_on(async {
                adapter
                    .scan(&["sessions"])
                    .unwrap()
                    .filter(|item| futures::future::ready(item.is_ok()))
                    .count()
                    .await
            });
            black_box(count);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_codec, bench_policy, bench_adapter, bench_scan);

criterion_main!(benches);
