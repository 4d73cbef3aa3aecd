use std::hint::black_box;
use std::time::Duration;

use criterion::{Criterion, criterion_group, criterion_main};
use ssml_core::ValidationConfig;
use ssml_processor::{derive, parse_ssml, serialize};

const SAMPLE_SSML: &str = include_str!("../tests/test_data/sample.ssml");

fn benchmark_ssml(c: &mut Criterion) {
    let mut group = c.benchmark_group("SSML Processing");

    group.measurement_time(Duration::from_secs(10));
    group.sample_size(200);

    let config = ValidationConfig::default();

    group.bench_function("parse_sample_ssml", |b| {
        b.iter(|| {
            let parsed = parse_ssml(black_box(SAMPLE_SSML), black_box(&config))
                .expect("样本解析失败");

            black_box(parsed);
        });
    });

    let document = parse_ssml(SAMPLE_SSML, &config)
        .expect("样本解析失败")
        .document;

    group.bench_function("serialize_sample_ssml", |b| {
        b.iter(|| black_box(serialize(black_box(&document), true).expect("样本序列化失败")));
    });

    group.bench_function("derive_sample_ssml", |b| {
        b.iter(|| black_box(derive(black_box(&document))));
    });

    group.finish();
}

criterion_group!(benches, benchmark_ssml);

criterion_main!(benches);
