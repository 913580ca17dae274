//! Benchmarks for rope simulation.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use glam::Vec3;
use rhizome_cable_rope::{AnchorState, RopeConfig, RopeSimulator};

const GRAVITY: Vec3 = Vec3::new(0.0, -9.81, 0.0);

fn rope(segments: usize, verlet: usize, solver: usize) -> RopeSimulator {
    RopeSimulator::new(
        AnchorState::fixed(Vec3::ZERO),
        AnchorState::fixed(Vec3::new(8.0, 0.0, 0.0)),
        RopeConfig::new(10.0, segments).with_iterations(verlet, solver),
    )
    .unwrap()
}

fn bench_rope_step(c: &mut Criterion) {
    c.bench_function("rope_step_16_segments", |b| {
        let mut rope = rope(16, 1, 1);
        b.iter(|| {
            rope.step(GRAVITY, 0.02);
            black_box(&rope);
        })
    });

    c.bench_function("rope_step_256_segments", |b| {
        let mut rope = rope(256, 1, 1);
        b.iter(|| {
            rope.step(GRAVITY, 0.02);
            black_box(&rope);
        })
    });

    c.bench_function("rope_step_64_segments_stiff", |b| {
        let mut rope = rope(64, 4, 16);
        b.iter(|| {
            rope.step(GRAVITY, 0.02);
            black_box(&rope);
        })
    });
}

fn bench_positions(c: &mut Criterion) {
    c.bench_function("rope_positions_into_256", |b| {
        let rope = rope(256, 1, 1);
        let mut buffer = Vec::new();
        b.iter(|| {
            rope.positions_into(&mut buffer);
            black_box(&buffer);
        })
    });
}

criterion_group!(benches, bench_rope_step, bench_positions);
criterion_main!(benches);
