//! Benchmarks for tube mesh generation.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use glam::Vec3;
use rhizome_cable_mesh::{TubeConfig, TubeMeshBuilder, tube_mesh};

fn helix(points: usize) -> Vec<Vec3> {
    (0..points)
        .map(|i| {
            let t = i as f32 * 0.1;
            Vec3::new(t.cos(), t * 0.2, t.sin())
        })
        .collect()
}

fn bench_tube_update(c: &mut Criterion) {
    let path = helix(64);

    c.bench_function("tube_update_64x6", |b| {
        let mut builder = TubeMeshBuilder::new(TubeConfig::new(6, 0.1)).unwrap();
        b.iter(|| {
            black_box(builder.build_or_update(black_box(&path)).unwrap());
        })
    });

    c.bench_function("tube_update_64x24", |b| {
        let mut builder = TubeMeshBuilder::new(TubeConfig::new(24, 0.1)).unwrap();
        b.iter(|| {
            black_box(builder.build_or_update(black_box(&path)).unwrap());
        })
    });
}

fn bench_tube_rebuild(c: &mut Criterion) {
    let path = helix(64);

    c.bench_function("tube_build_fresh_64x6", |b| {
        b.iter(|| black_box(tube_mesh(black_box(&path), 6, 0.1).unwrap()))
    });
}

criterion_group!(benches, bench_tube_update, bench_tube_rebuild);
criterion_main!(benches);
