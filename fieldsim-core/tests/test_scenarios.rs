//! Tests for the built-in scenarios and field-grid drawing

use fieldsim_core::runtime::{draw_field_grid, run_simulation, SetupError, SimState};
use fieldsim_core::scenario::{build, ScenarioKind};
use fieldsim_core::tests::test_helpers::{approx_eq_f32, RecordingCanvas};
use std::time::Duration;

#[test]
fn test_all_scenarios_build() {
    for kind in ScenarioKind::ALL {
        let scenario = build(kind).unwrap();
        assert_eq!(scenario.label, kind.label());
        assert!(!scenario.sim.world.bodies.is_empty());
    }
}

#[test]
fn test_scenario_tick_budgets() {
    assert_eq!(build(ScenarioKind::Spring).unwrap().sim.max_steps, 1000);
    assert_eq!(
        build(ScenarioKind::DampedOscillator).unwrap().sim.max_steps,
        30_000
    );
    assert_eq!(build(ScenarioKind::Orbits).unwrap().sim.max_steps, 90_000);
    assert_eq!(build(ScenarioKind::Charges).unwrap().sim.max_steps, 0);
}

#[test]
fn test_spring_scenario_oscillates() {
    let mut scenario = build(ScenarioKind::Spring).unwrap();
    let mut canvas = RecordingCanvas::new((400.0, 400.0));
    scenario.sim.attach_markers(&mut canvas);

    run_simulation(&mut scenario.sim, &mut canvas, Duration::ZERO).unwrap();

    // The body must have crossed the origin at least once.
    let crossed = canvas.markers[0].moves.iter().any(|p| p.x < 0.0);
    assert!(crossed, "spring never swung past the origin");
    assert_eq!(scenario.sim.state(), SimState::Finished);
}

#[test]
fn test_damped_scenario_draws_a_drifting_wave() {
    // The damped law acts along x only, so the initial (0, 10) launch keeps
    // its y velocity forever and the trail is a damped wave, not a spiral.
    let mut scenario = build(ScenarioKind::DampedOscillator).unwrap();
    let mut canvas = RecordingCanvas::new((400.0, 400.0));
    scenario.sim.attach_markers(&mut canvas);

    run_simulation(&mut scenario.sim, &mut canvas, Duration::ZERO).unwrap();

    let body = &scenario.sim.world.bodies[0];
    assert!(approx_eq_f32(body.vel.y, 10.0, 1e-4), "y velocity must be untouched by the damping");
    // 30s at vy = 10 of upward drift.
    assert!(approx_eq_f32(body.pos.y, 300.0, 0.5));

    // Drag bleeds the x oscillation: k = 1, m = 1, so the x energy
    // 0.5*vx^2 + 0.5*x^2 starts at 5000 and rings down hard over 30s.
    let x_energy = 0.5 * body.vel.x * body.vel.x + 0.5 * body.pos.x * body.pos.x;
    assert!(x_energy < 1000.0, "x oscillation should have decayed, got energy {x_energy}");
}

#[test]
fn test_orbits_scenario_moves_every_planet() {
    let mut scenario = build(ScenarioKind::Orbits).unwrap();
    let mut canvas = RecordingCanvas::new((400.0, 400.0));
    scenario.sim.attach_markers(&mut canvas);

    let starts: Vec<_> = scenario.sim.world.bodies.iter().map(|b| b.pos).collect();
    for _ in 0..100 {
        fieldsim_core::step_simulation(&mut scenario.sim, &mut canvas).unwrap();
    }

    for (body, start) in scenario.sim.world.bodies.iter().zip(starts) {
        assert!(body.pos != start, "{} did not move", body.name);
    }
}

#[test]
fn test_charges_scenario_is_static_with_a_grid() {
    let scenario = build(ScenarioKind::Charges).unwrap();
    assert_eq!(scenario.sim.state(), SimState::Finished);

    let grid = scenario.grid.expect("charges scenario draws a field grid");
    assert_eq!(grid.field, 0);
    assert!(approx_eq_f32(grid.spacing, 20.0, 1e-6));
}

#[test]
fn test_field_grid_sample_count_follows_extent() {
    let scenario = build(ScenarioKind::Charges).unwrap();
    let mut canvas = RecordingCanvas::new((100.0, 100.0));

    draw_field_grid(&scenario.sim.world, 0, 20.0, &mut canvas).unwrap();

    // 5 sample columns x 5 sample rows across a 100x100 extent.
    assert_eq!(canvas.segments.len(), 25);
    // Each segment runs from the sample point to point + field value.
    for (from, to) in &canvas.segments {
        let value = scenario.sim.world.fields[0]
            .value_at(*from, &scenario.sim.world.bodies)
            .unwrap();
        assert!(approx_eq_f32(to.x, from.x + value.x, 1e-4));
        assert!(approx_eq_f32(to.y, from.y + value.y, 1e-4));
    }
}

#[test]
fn test_field_grid_rejects_non_positive_spacing() {
    let scenario = build(ScenarioKind::Charges).unwrap();
    let mut canvas = RecordingCanvas::new((100.0, 100.0));

    assert!(matches!(
        draw_field_grid(&scenario.sim.world, 0, 0.0, &mut canvas),
        Err(SetupError::InvalidGridSpacing(_))
    ));
    assert!(canvas.segments.is_empty());
}
