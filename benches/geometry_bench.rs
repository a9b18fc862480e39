use criterion::{Criterion, criterion_group, criterion_main};
use dataviz_studio::core::{
    CanvasSpec, ChartPoint, Palette, PieLayout, project_bar_geometry, project_line_geometry,
    project_pie_geometry,
};
use std::hint::black_box;

fn sample_points(count: usize) -> Vec<ChartPoint> {
    (0..count)
        .map(|i| {
            let value = 50.0 + (i as f64 * 0.7).sin() * 40.0;
            ChartPoint::new(format!("sample-{i}"), value)
        })
        .collect()
}

fn bench_bar_projection_10k(c: &mut Criterion) {
    let palette = Palette::default();
    let points = sample_points(10_000);

    c.bench_function("bar_projection_10k", |b| {
        b.iter(|| {
            let bars = project_bar_geometry(black_box(&points), black_box(&palette));
            black_box(bars);
        })
    });
}

fn bench_line_projection_10k(c: &mut Criterion) {
    let canvas = CanvasSpec::default();
    let points = sample_points(10_000);

    c.bench_function("line_projection_10k", |b| {
        b.iter(|| {
            let geometry = project_line_geometry(black_box(&points), black_box(canvas))
                .expect("projection should succeed");
            black_box(geometry);
        })
    });
}

fn bench_pie_projection_1k(c: &mut Criterion) {
    let palette = Palette::default();
    let layout = PieLayout::default();
    let points = sample_points(1_000);

    c.bench_function("pie_projection_1k", |b| {
        b.iter(|| {
            let slices =
                project_pie_geometry(black_box(&points), black_box(layout), black_box(&palette))
                    .expect("projection should succeed");
            black_box(slices);
        })
    });
}

criterion_group!(
    benches,
    bench_bar_projection_10k,
    bench_line_projection_10k,
    bench_pie_projection_1k
);
criterion_main!(benches);
