use std::io::Cursor;

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use grafana2hashcat::{convert, convert_line};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SALT_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generates a Grafana-style export with random 32-byte digests and 10-char salts.
/// Uses a fixed seed for reproducible benchmark results
fn generate_export(count: usize) -> String {
    let mut rng = StdRng::seed_from_u64(42);
    let mut export = String::with_capacity(count * 76);

    for _ in 0..count {
        let digest: [u8; 32] = rng.r#gen();
        export.push_str(&hex::encode(digest));
        export.push(':');
        for _ in 0..10 {
            export.push(SALT_CHARS[rng.gen_range(0..SALT_CHARS.len())] as char);
        }
        export.push('\n');
    }

    export
}

fn bench_convert_line(c: &mut Criterion) {
    let line = b"2ac9cb7dc02b3c0083eb70898e549b632ac9cb7dc02b3c0083eb70898e549b63:a1B2c3D4e5";
    c.bench_function("convert_line", |b| b.iter(|| convert_line(black_box(line)).unwrap()));
}

fn bench_convert_export(c: &mut Criterion) {
    let export = generate_export(10_000);
    let mut out = Vec::with_capacity(export.len());

    let mut group = c.benchmark_group("convert");
    group.throughput(Throughput::Bytes(export.len() as u64));
    group.bench_function("10k_lines", |b| {
        b.iter(|| {
            out.clear();
            convert(Cursor::new(black_box(export.as_bytes())), &mut out).unwrap()
        })
    });
    group.finish();
}

criterion_group!(benches, bench_convert_line, bench_convert_export);
criterion_main!(benches);
