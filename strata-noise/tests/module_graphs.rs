//! Whole-graph evaluation scenarios.

use std::sync::Arc;

use strata_noise::module::{
    Add, Billow, Blend, Checkerboard, Clamp, Const, Curve, Cylinders, Invert, Module, Perlin,
    RidgedMulti, ScaleBias, Select, SharedModule, Spheres, Terrace, TranslatePoint, Turbulence,
    Voronoi,
};

fn constant(value: f64) -> SharedModule {
    let mut module = Const::new();
    module.set_const_value(value);
    Arc::new(module)
}

#[test]
fn constant_passes_through_exactly() {
    let mut module = Const::new();
    module.set_const_value(0.7);
    assert_eq!(module.get_value(5.0, 5.0, 5.0).to_bits(), 0.7_f64.to_bits());
}

#[test]
fn checkerboard_cells() {
    let board = Checkerboard::new();
    assert_eq!(board.get_value(0.5, 0.5, 0.5).to_bits(), 1.0_f64.to_bits());
    assert_eq!(board.get_value(1.5, 0.5, 0.5).to_bits(), (-1.0_f64).to_bits());
}

#[test]
fn pattern_generators_hit_reference_points() {
    assert_eq!(Cylinders::new().get_value(1.0, 0.0, 0.0).to_bits(), 1.0_f64.to_bits());
    assert_eq!(Spheres::new().get_value(0.5, 0.0, 0.0).to_bits(), (-1.0_f64).to_bits());
}

#[test]
fn fractal_generators_are_referentially_transparent() {
    let perlin = Perlin::new();
    let billow = Billow::new();
    let ridged = RidgedMulti::new();
    let voronoi = Voronoi::new();

    for i in 0..25 {
        let x = f64::from(i) * 0.37 - 4.0;
        let y = f64::from(i) * 0.11 + 2.0;
        let z = f64::from(i) * 0.93 - 11.0;
        for module in [&perlin as &dyn Module, &billow, &ridged, &voronoi] {
            let a = module.get_value(x, y, z);
            let b = module.get_value(x, y, z);
            assert!(a.is_finite());
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }
}

#[test]
fn add_of_constants() {
    let mut add = Add::new();
    add.set_source(0, constant(0.3)).unwrap();
    add.set_source(1, constant(0.4)).unwrap();
    assert_eq!(add.get_value(0.0, 0.0, 0.0).to_bits(), (0.3_f64 + 0.4).to_bits());
}

#[test]
fn blend_at_neutral_control() {
    let mut blend = Blend::new();
    blend.set_source(0, constant(-1.0)).unwrap();
    blend.set_source(1, constant(1.0)).unwrap();
    blend.set_control_module(constant(0.0));
    assert_eq!(blend.get_value(0.0, 0.0, 0.0).to_bits(), 0.0_f64.to_bits());
}

#[test]
fn scale_bias_identity_matches_the_bare_module() {
    let perlin: SharedModule = Arc::new(Perlin::new());
    let mut wrapped = ScaleBias::new();
    wrapped.set_source(0, Arc::clone(&perlin)).unwrap();

    for i in 0..10 {
        let p = f64::from(i) * 0.71 - 3.0;
        assert_eq!(
            wrapped.get_value(p, -p, p * 2.0).to_bits(),
            perlin.get_value(p, -p, p * 2.0).to_bits()
        );
    }
}

#[test]
fn double_inversion_is_the_identity() {
    let perlin: SharedModule = Arc::new(Perlin::new());
    let mut inner = Invert::new();
    inner.set_source(0, Arc::clone(&perlin)).unwrap();
    let mut outer = Invert::new();
    outer.set_source(0, Arc::new(inner)).unwrap();

    for i in 0..10 {
        let p = f64::from(i) * 0.43 + 0.5;
        assert_eq!(
            outer.get_value(p, p, p).to_bits(),
            perlin.get_value(p, p, p).to_bits()
        );
    }
}

#[test]
fn a_terrain_like_graph_evaluates_deterministically() {
    // Ridged mountains and billowy lowlands, selected by a low-frequency
    // Perlin control with soft edges, then terraced and warped.
    let mountains: SharedModule = Arc::new(RidgedMulti::new());

    let mut lowland_base = Billow::new();
    lowland_base.set_frequency(2.0);
    let mut lowlands = ScaleBias::new();
    lowlands.set_scale(0.125);
    lowlands.set_bias(-0.75);
    lowlands.set_source(0, Arc::new(lowland_base)).unwrap();

    let mut control = Perlin::new();
    control.set_frequency(0.5);
    control.set_octave_count(2).unwrap();

    let mut surface = Select::new();
    surface.set_source(0, Arc::new(lowlands)).unwrap();
    surface.set_source(1, mountains).unwrap();
    surface.set_control_module(Arc::new(control));
    surface.set_bounds(0.0, 1.0).unwrap();
    surface.set_edge_falloff(0.125);

    let mut stepped = Terrace::new();
    stepped.make_control_points(6).unwrap();
    stepped.set_source(0, Arc::new(surface)).unwrap();

    let mut warped = Turbulence::new();
    warped.set_power(0.125);
    warped.set_source(0, Arc::new(stepped)).unwrap();

    let mut clamped = Clamp::new();
    clamped.set_source(0, Arc::new(warped)).unwrap();

    for i in 0..50 {
        let x = f64::from(i) * 0.173 - 3.1;
        let z = f64::from(i) * 0.291 + 1.7;
        let a = clamped.get_value(x, 0.0, z);
        let b = clamped.get_value(x, 0.0, z);
        assert!((-1.0..=1.0).contains(&a));
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

#[test]
fn shared_subgraphs_see_identical_values() {
    // The same Perlin feeds both halves of an Add through different
    // translations; translating by zero must reproduce the bare value twice.
    let shared: SharedModule = Arc::new(Perlin::new());

    let mut left = TranslatePoint::new();
    left.set_source(0, Arc::clone(&shared)).unwrap();
    let mut right = TranslatePoint::new();
    right.set_source(0, Arc::clone(&shared)).unwrap();

    let mut sum = Add::new();
    sum.set_source(0, Arc::new(left)).unwrap();
    sum.set_source(1, Arc::new(right)).unwrap();

    let direct = shared.get_value(0.9, 1.8, 2.7);
    assert_eq!(sum.get_value(0.9, 1.8, 2.7).to_bits(), (direct + direct).to_bits());
}

#[test]
fn concurrent_evaluation_of_a_shared_graph() {
    let mut ridged = RidgedMulti::new();
    ridged.set_octave_count(4).unwrap();
    let mut curve = Curve::new();
    for i in -2..=2 {
        curve.add_control_point(f64::from(i), f64::from(i) * 0.5).unwrap();
    }
    curve.set_source(0, Arc::new(ridged)).unwrap();
    let graph: SharedModule = Arc::new(curve);

    let baseline: Vec<f64> = (0..64)
        .map(|i| {
            let p = f64::from(i) * 0.17;
            graph.get_value(p, -p, 2.0 * p)
        })
        .collect();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            let graph = Arc::clone(&graph);
            let baseline = &baseline;
            scope.spawn(move || {
                for (i, expected) in baseline.iter().enumerate() {
                    let p = f64::from(u32::try_from(i).unwrap()) * 0.17;
                    let value = graph.get_value(p, -p, 2.0 * p);
                    assert_eq!(value.to_bits(), expected.to_bits());
                }
            });
        }
    });
}

#[test]
fn configuration_errors_leave_graphs_usable() {
    let mut select = Select::new();
    select.set_source(0, constant(1.0)).unwrap();
    select.set_source(1, constant(2.0)).unwrap();
    select.set_control_module(constant(0.0));

    // A rejected reconfiguration must not corrupt the module.
    assert!(select.set_bounds(3.0, -3.0).is_err());
    assert_eq!(select.get_value(0.0, 0.0, 0.0).to_bits(), 2.0_f64.to_bits());
}
