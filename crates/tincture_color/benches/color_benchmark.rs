//! # Color Benchmark
//!
//! `set` runs whenever a setting changes; the getters and `apply_to_sink`
//! run on every draw. The getters must stay at copy cost.

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tincture_color::{ops, ColorSink, ColorValue, SharedColor};

/// Sink that only keeps the last color, like a GL color stack.
struct LastColor([f32; 4]);

impl ColorSink for LastColor {
    fn apply(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.0 = [r, g, b, a];
    }
}

fn bench_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("color_set");
    let mut color = ColorValue::default();

    group.bench_function("packed", |b| {
        b.iter(|| color.set(black_box(0x3366_99CCu32)));
    });
    group.bench_function("bytes", |b| {
        b.iter(|| color.set(black_box([51u8, 102, 153, 204])));
    });
    group.bench_function("normalized", |b| {
        b.iter(|| color.set(black_box([0.2f32, 0.4, 0.6, 0.8])));
    });

    group.finish();
}

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("color_draw");
    let color = ColorValue::new(0x3366_99CCu32);
    let shared = SharedColor::from(color);
    let mut sink = LastColor([0.0; 4]);

    group.bench_function("apply_value", |b| {
        b.iter(|| black_box(&color).apply_to_sink(&mut sink, None));
    });
    group.bench_function("apply_value_alpha", |b| {
        b.iter(|| black_box(&color).apply_to_sink(&mut sink, Some(0.5)));
    });
    group.bench_function("apply_shared", |b| {
        b.iter(|| black_box(&shared).apply_to_sink(&mut sink, None));
    });
    group.bench_function("apply_raw_255", |b| {
        b.iter(|| ops::apply_sink_255(&mut sink, black_box([51u8, 102, 153, 204])));
    });

    group.finish();
}

criterion_group!(benches, bench_set, bench_draw);
criterion_main!(benches);
