use criterion::{criterion_group, criterion_main, Criterion};
use keyfit::analyzer::{aggregate, analyze_one};
use keyfit::layouts::{get_all_layouts, KnownLayout};
use keyfit::text::SampleText;
use std::hint::black_box;

fn corpus() -> String {
    let mut text = String::new();
    for _ in 0..50 {
        text.push_str(&SampleText::Colemak.text().to_lowercase());
        text.push('\n');
        text.push_str(SampleText::Usher.text());
        text.push('\n');
    }
    text
}

fn criterion_benchmark(c: &mut Criterion) {
    let text = corpus();
    let qwerty = KnownLayout::Qwerty.build();
    let mut layouts = get_all_layouts();
    for l in &mut layouts {
        l.enabled = true;
    }

    c.bench_function("analyze_one_qwerty", |b| {
        b.iter(|| analyze_one(black_box(&text), black_box(&qwerty)))
    });

    c.bench_function("aggregate_all_builtin", |b| {
        b.iter(|| aggregate(black_box(&text), black_box(&layouts)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
