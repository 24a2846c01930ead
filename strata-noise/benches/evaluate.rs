#![allow(missing_docs)]
//! Benchmarks for single-sample graph evaluation.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};

use strata_noise::NoiseQuality;
use strata_noise::module::{
    Billow, Module, Perlin, RidgedMulti, ScaleBias, Select, SharedModule, Terrace, Turbulence,
    Voronoi,
};

fn bench_generators(c: &mut Criterion) {
    let mut group = c.benchmark_group("generators");

    let perlin = Perlin::new();
    group.bench_function("perlin_6_octaves", |b| {
        b.iter(|| black_box(perlin.get_value(black_box(1.1), black_box(2.2), black_box(3.3))));
    });

    let mut perlin_best = Perlin::new();
    perlin_best.set_noise_quality(NoiseQuality::Best);
    group.bench_function("perlin_6_octaves_best_quality", |b| {
        b.iter(|| black_box(perlin_best.get_value(black_box(1.1), black_box(2.2), black_box(3.3))));
    });

    let ridged = RidgedMulti::new();
    group.bench_function("ridged_6_octaves", |b| {
        b.iter(|| black_box(ridged.get_value(black_box(1.1), black_box(2.2), black_box(3.3))));
    });

    let voronoi = Voronoi::new();
    group.bench_function("voronoi", |b| {
        b.iter(|| black_box(voronoi.get_value(black_box(1.1), black_box(2.2), black_box(3.3))));
    });

    group.finish();
}

fn bench_terrain_graph(c: &mut Criterion) {
    // A representative terrain stack: ridged mountains against billowy
    // plains, selected by a low-frequency control, terraced and warped.
    let mountains: SharedModule = Arc::new(RidgedMulti::new());

    let mut plains_base = Billow::new();
    plains_base.set_frequency(2.0);
    let mut plains = ScaleBias::new();
    plains.set_scale(0.125);
    plains.set_bias(-0.75);
    plains.set_source(0, Arc::new(plains_base)).unwrap();

    let mut control = Perlin::new();
    control.set_frequency(0.5);

    let mut surface = Select::new();
    surface.set_source(0, Arc::new(plains)).unwrap();
    surface.set_source(1, mountains).unwrap();
    surface.set_control_module(Arc::new(control));
    surface.set_bounds(0.0, 1.0).unwrap();
    surface.set_edge_falloff(0.125);

    let mut stepped = Terrace::new();
    stepped.make_control_points(6).unwrap();
    stepped.set_source(0, Arc::new(surface)).unwrap();

    let mut graph = Turbulence::new();
    graph.set_power(0.125);
    graph.set_source(0, Arc::new(stepped)).unwrap();

    c.bench_function("terrain_graph_single_sample", |b| {
        b.iter(|| black_box(graph.get_value(black_box(0.7), black_box(0.0), black_box(-1.3))));
    });
}

criterion_group!(benches, bench_generators, bench_terrain_graph);
criterion_main!(benches);
