//! Benchmarks for the document parser.
//!
//! These measure single-pass parsing over synthetic documents of various
//! sizes, including variable declarations and bodies, so regressions in the
//! line classifier show up quickly.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use reqtui::parser::parse_str;

/// Generate a synthetic document with the given number of requests.
fn generate_document(num_requests: usize) -> String {
    let mut content = String::from("@host = https://api.example.com\n@token = t-123\n\n");

    for i in 0..num_requests {
        content.push_str(&format!(
            "### Request {}\n\
             POST {{{{host}}}}/resource/{}\n\
             Authorization: Bearer {{{{token}}}}\n\
             Content-Type: application/json\n\
             X-Request-ID: {}\n\
             \n\
             {{\n\
               \"index\": {},\n\
               \"payload\": \"value-{}\"\n\
             }}\n\
             \n",
            i, i, i, i, i
        ));
    }

    content
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_document");

    for num_requests in [10, 100, 1000] {
        let content = generate_document(num_requests);
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_requests),
            &content,
            |b, content| {
                b.iter(|| parse_str(black_box(content)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
