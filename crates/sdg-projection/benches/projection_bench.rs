use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sdg_core::models::SectorAllocation;
use sdg_projection::ProjectionEngine;

fn bench_project(c: &mut Criterion) {
    let engine = ProjectionEngine::new();
    let allocation = SectorAllocation {
        education: 10.0,
        health: 15.0,
        water: 10.0,
        energy: 15.0,
        agriculture: 30.0,
        infrastructure: 20.0,
    };

    c.bench_function("project", |b| {
        b.iter(|| engine.project(black_box(&allocation)))
    });

    c.bench_function("suggest_allocation", |b| b.iter(|| engine.suggest_allocation()));
}

criterion_group!(benches, bench_project);
criterion_main!(benches);
