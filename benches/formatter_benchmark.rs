//! Benchmarks for the streaming JSON re-indenter.
//!
//! The formatter is a single byte scan with no parse tree, so throughput
//! should stay flat as payloads grow.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use reqtui::formatter::json::reindent;

/// Generate a minified JSON array of objects of roughly the target size.
fn generate_json(num_items: usize) -> Vec<u8> {
    let mut out = String::from("{\"items\":[");
    for i in 0..num_items {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&format!(
            "{{\"id\":{},\"name\":\"item-{}\",\"tags\":[\"a\",\"b\"],\"meta\":{{\"active\":true}}}}",
            i, i
        ));
    }
    out.push_str("],\"total\":");
    out.push_str(&num_items.to_string());
    out.push('}');
    out.into_bytes()
}

fn bench_reindent(c: &mut Criterion) {
    let mut group = c.benchmark_group("reindent_json");

    for num_items in [10, 1000, 10_000] {
        let json = generate_json(num_items);
        group.throughput(Throughput::Bytes(json.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_items),
            &json,
            |b, json| {
                b.iter(|| reindent(black_box(json)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_reindent);
criterion_main!(benches);
