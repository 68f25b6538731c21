use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use recap_core::SummaryOptions;
use recap_textrank::{extract_key_phrases, summarize};

const TOPICS: &[&str] = &[
    "The council approved the transit budget after a long debate.",
    "Riders asked for later service hours on weekend routes.",
    "The bakery on Main Street expanded its morning hours.",
    "Engineers inspected the river bridge before the winter storms.",
    "School enrollment grew for the third year in a row.",
    "Energy prices fell as new solar farms came online.",
    "The museum opened a garden exhibit with local artists.",
];

/// Document of `n` sentences cycling through the topics with a counter so no
/// two sentences are identical.
fn document(n: usize) -> String {
    (0..n)
        .map(|i| {
            let topic = TOPICS[i % TOPICS.len()];
            format!("{} Update {i} followed.", topic.trim_end_matches('.'))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn bench_summarize(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize");
    for n in [10usize, 50, 200] {
        let text = document(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &text, |b, text| {
            b.iter(|| summarize(text, &SummaryOptions::default()).unwrap());
        });
    }
    group.finish();
}

fn bench_key_phrases(c: &mut Criterion) {
    let text = document(200);
    c.bench_function("key_phrases_200", |b| {
        b.iter(|| extract_key_phrases(&text, None, 10));
    });
}

criterion_group!(benches, bench_summarize, bench_key_phrases);
criterion_main!(benches);
