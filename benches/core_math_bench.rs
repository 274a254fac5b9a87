use criterion::{Criterion, criterion_group, criterion_main};
use indexmap::IndexMap;
use radar_rs::core::{AxisCaptionMap, DataSeries, RadarConfig, derive_axes, shape_tuples};
use radar_rs::scene::render;
use std::hint::black_box;

fn bench_shape_projection_32_axes(c: &mut Criterion) {
    let captions: AxisCaptionMap = (0..32)
        .map(|i| (format!("axis-{i}"), format!("Axis {i}")))
        .collect();
    let axes = derive_axes(&captions).expect("axes");
    let series = DataSeries::new(
        (0..32)
            .map(|i| (format!("axis-{i}"), f64::from(i) / 32.0))
            .collect::<IndexMap<_, _>>(),
    );

    c.bench_function("shape_projection_32_axes", |b| {
        b.iter(|| {
            let _ = shape_tuples(black_box(&axes), black_box(&series), 0, black_box(250.0))
                .expect("tuples");
        })
    });
}

fn bench_full_compose_8_series(c: &mut Criterion) {
    let captions: AxisCaptionMap = (0..12)
        .map(|i| (format!("axis-{i}"), format!("Axis {i}")))
        .collect();
    let data: Vec<DataSeries> = (0..8)
        .map(|s| {
            DataSeries::new(
                (0..12)
                    .map(|i| (format!("axis-{i}"), f64::from((s + i) % 12) / 12.0))
                    .collect::<IndexMap<_, _>>(),
            )
        })
        .collect();
    let config = RadarConfig::default().with_scales(5).with_dots(true);

    c.bench_function("full_compose_8_series", |b| {
        b.iter(|| {
            let _ = render(
                black_box(&captions),
                black_box(&data),
                black_box(&config),
                black_box(Some(3)),
            )
            .expect("compose");
        })
    });
}

criterion_group!(
    benches,
    bench_shape_projection_32_axes,
    bench_full_compose_8_series
);
criterion_main!(benches);
