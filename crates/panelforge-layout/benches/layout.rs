//! Benchmarks for guide generation and anchor resolution.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use panelforge_core::Size;
use panelforge_layout::{compute_guides, resolve_region};
use panelforge_schema::{Anchor, FlowAxis, GridSpec, Insets, Layout, Padding};

fn bench_layout(c: &mut Criterion) {
    let layout = Layout {
        flow_axis: FlowAxis::LeftToRight,
        safe_area: Insets {
            top: 24.0,
            left: 12.0,
            bottom: 12.0,
            right: 12.0,
        },
        padding: Padding { x: 8.0, y: 8.0 },
        grid: GridSpec {
            columns: 12,
            rows: 8,
            gutter_x: 4.0,
            gutter_y: 4.0,
        },
    };
    let bounds = Size::new(1280.0, 800.0);

    c.bench_function("compute_guides_12x8", |b| {
        b.iter(|| compute_guides(black_box(bounds), black_box(&layout)));
    });

    let guides = compute_guides(bounds, &layout).unwrap();
    let anchors: Vec<Anchor> = (0..8u32)
        .map(|i| Anchor::span(i % 4, i % 2, 2, 2))
        .collect();

    c.bench_function("resolve_8_anchors", |b| {
        b.iter(|| {
            for anchor in &anchors {
                let _ = resolve_region(black_box("g"), black_box(anchor), black_box(&guides));
            }
        });
    });
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
