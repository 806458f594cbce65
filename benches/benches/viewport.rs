// Copyright 2026 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the seat-map viewport hot paths.
//!
//! The constraint solver runs on every pan/pinch/wheel mutation, and the
//! pinch path runs it plus the anchor solve per pointer-move; both are
//! measured over a synthetic stadium-sized venue.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size, Vec2};
use seatmap_camera::fit;
use seatmap_viewport::{ViewportConfig, ViewportEngine};

const SCREEN: Size = Size::new(1_920.0, 1_080.0);
const VENUE: Rect = Rect::new(0.0, 0.0, 12_000.0, 9_000.0);

fn bench_constrain(c: &mut Criterion) {
    let mut group = c.benchmark_group("constrain_origin");

    group.bench_function("oversized_content", |b| {
        b.iter(|| {
            let mut origin = Vec2::new(-3_000.0, -2_000.0);
            for step in 0..256 {
                origin.x += f64::from(step % 17) - 8.0;
                origin.y += f64::from(step % 13) - 6.0;
                origin = fit::constrain_origin(
                    black_box(origin),
                    black_box(1.5),
                    Some(VENUE),
                    SCREEN,
                );
            }
            origin
        });
    });

    group.bench_function("letterboxed_content", |b| {
        b.iter(|| {
            fit::constrain_origin(
                black_box(Vec2::new(123.0, 456.0)),
                black_box(0.05),
                Some(VENUE),
                SCREEN,
            )
        });
    });

    group.finish();
}

fn bench_pinch_stream(c: &mut Criterion) {
    c.bench_function("pinch_event_stream", |b| {
        b.iter(|| {
            let mut engine = ViewportEngine::new(SCREEN, ViewportConfig::default());
            engine.fit_content(0, VENUE);

            engine.pointer_down(10, 1, Point::new(800.0, 500.0));
            engine.pointer_down(20, 2, Point::new(1_100.0, 500.0));

            // Spread then travel: 128 incremental pinch moves.
            let mut events = 0_usize;
            for step in 0..128_u32 {
                let t = 30 + u64::from(step) * 8;
                let x = 1_100.0 + f64::from(step) * 4.0;
                events += engine.pointer_move(t, 2, Point::new(x, 500.0)).len();
            }
            engine.pointer_up(1_100, 2, Point::new(1_612.0, 500.0));
            engine.pointer_up(1_110, 1, Point::new(800.0, 500.0));
            black_box(events)
        });
    });
}

criterion_group!(benches, bench_constrain, bench_pinch_stream);
criterion_main!(benches);
