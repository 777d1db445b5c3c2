//! # Monitor Script Signing Benchmarks
//!
//! | Operation | Input |
//! |-----------|-------|
//! | encode | script body of increasing size |
//! | assemble | encode + HMAC-SHA256 for one location |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use monitor_script::domain::{assemble, encode_script};
use monitor_script::{LocationDeclaration, LocationSigner, SecureSecret};

const BODY_SIZES: [usize; 4] = [64, 1_024, 16_384, 262_144];

fn make_body(size: usize) -> String {
    "a".repeat(size)
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("monitor-script-encode");

    for size in BODY_SIZES {
        let body = make_body(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("encode_script", size), &body, |b, body| {
            b.iter(|| black_box(encode_script(body)))
        });
    }

    group.finish();
}

fn bench_assemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("monitor-script-assemble");
    let signer = LocationSigner::body_only(SecureSecret::from_passphrase("bench-secret"));
    let locations = [LocationDeclaration::new("us-east")];

    for size in BODY_SIZES {
        let body = make_body(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("assemble", size), &body, |b, body| {
            b.iter(|| black_box(assemble(body, &locations, &signer)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_assemble);
criterion_main!(benches);
