//! Built-in teaching scenarios, with the constants of the classic turtle
//! demos: a spring, a damped oscillator, three mutually orbiting planets,
//! and a static electric field drawn as a vector grid.

use crate::engine::{Appearance, Body, ForceLaw, Shape, World};
use crate::field::{Field, FieldKind};
use crate::runtime::{SetupError, Simulation};
use glam::Vec2;
use std::time::Duration;

/// Request to draw a field as a vector grid before the run starts
#[derive(Debug, Clone, Copy)]
pub struct GridSpec {
    /// Field index in the world.
    pub field: usize,
    /// Distance between grid sample points.
    pub spacing: f32,
}

/// A ready-to-run simulation plus its presentation hints
#[derive(Debug)]
pub struct Scenario {
    pub label: &'static str,
    pub sim: Simulation,
    /// Ticks to coalesce per redraw; purely a rendering hint.
    pub ticks_per_frame: u32,
    /// Cosmetic sleep between ticks.
    pub tick_pacing: Duration,
    pub grid: Option<GridSpec>,
}

/// The built-in scenarios
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioKind {
    Spring,
    DampedOscillator,
    Orbits,
    Charges,
}

impl ScenarioKind {
    pub const ALL: [ScenarioKind; 4] = [
        ScenarioKind::Spring,
        ScenarioKind::DampedOscillator,
        ScenarioKind::Orbits,
        ScenarioKind::Charges,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ScenarioKind::Spring => "spring",
            ScenarioKind::DampedOscillator => "damped-oscillator",
            ScenarioKind::Orbits => "orbits",
            ScenarioKind::Charges => "charges",
        }
    }
}

/// Build the scenario for `kind`.
pub fn build(kind: ScenarioKind) -> Result<Scenario, SetupError> {
    match kind {
        ScenarioKind::Spring => simple_harmonic(),
        ScenarioKind::DampedOscillator => damped_oscillator(),
        ScenarioKind::Orbits => orbits(),
        ScenarioKind::Charges => charges(),
    }
}

/// A mass on a spring, released from rest at x = 50.
pub fn simple_harmonic() -> Result<Scenario, SetupError> {
    let mut world = World::new();
    world.bodies.push(
        Body::new("spring", Vec2::new(50.0, 0.0), Vec2::ZERO, 1.0)
            .with_law(ForceLaw::Spring { k: 2.0 })
            .with_appearance(Appearance {
                color: Some("gray".to_string()),
                shape: Shape::Square,
                trail: true,
            }),
    );

    Ok(Scenario {
        label: "spring",
        sim: Simulation::new(world, 0.03, 30.0)?,
        ticks_per_frame: 1,
        tick_pacing: Duration::ZERO,
        grid: None,
    })
}

/// A lightly damped oscillator launched sideways, so the trail spirals in.
pub fn damped_oscillator() -> Result<Scenario, SetupError> {
    let mut world = World::new();
    world.bodies.push(
        Body::new("pendulum", Vec2::new(100.0, 0.0), Vec2::new(0.0, 10.0), 1.0)
            .with_law(ForceLaw::Damped { k: 1.0, b: 0.1 })
            .with_appearance(Appearance {
                color: Some("black".to_string()),
                shape: Shape::Arrow,
                trail: true,
            }),
    );

    Ok(Scenario {
        label: "damped-oscillator",
        sim: Simulation::new(world, 1e-3, 30.0)?,
        ticks_per_frame: 100,
        tick_pacing: Duration::ZERO,
        grid: None,
    })
}

/// Three equal masses in a triangle, each falling through the gravitational
/// field the three of them generate together.
pub fn orbits() -> Result<Scenario, SetupError> {
    let spread = 3.0f32.sqrt() * 40.0;
    let colors = ["green", "blue", "red"];
    let starts = [
        (Vec2::new(0.0, -80.0), Vec2::new(0.0, 4.0)),
        (Vec2::new(-spread, 40.0), Vec2::new(-2.0, 4.0)),
        (Vec2::new(spread, 40.0), Vec2::new(2.0, -8.0)),
    ];

    let mut world = World::new();
    for (i, (pos, vel)) in starts.into_iter().enumerate() {
        world.bodies.push(
            Body::new(format!("planet-{}", i + 1), pos, vel, 8000.0)
                .with_law(ForceLaw::FieldDriven { field: 0 })
                .with_appearance(Appearance {
                    color: Some(colors[i].to_string()),
                    shape: Shape::Circle,
                    trail: true,
                }),
        );
    }
    world
        .fields
        .push(Field::with_constant(FieldKind::Gravitational, 1.0, vec![0, 1, 2]));

    Ok(Scenario {
        label: "orbits",
        sim: Simulation::new(world, 1e-3, 90.0)?,
        ticks_per_frame: 200,
        tick_pacing: Duration::ZERO,
        grid: None,
    })
}

/// Two opposite static point charges; nothing moves, the electric field is
/// drawn as a grid of vectors instead.
pub fn charges() -> Result<Scenario, SetupError> {
    let mut world = World::new();
    // Unit mass: the charges never move, but masses must stay positive.
    world.bodies.push(
        Body::new("plus", Vec2::new(0.0, 30.0), Vec2::ZERO, 1.0)
            .with_charge(100.0)
            .with_appearance(Appearance {
                color: Some("red".to_string()),
                shape: Shape::Circle,
                trail: false,
            }),
    );
    world.bodies.push(
        Body::new("minus", Vec2::new(0.0, -30.0), Vec2::ZERO, 1.0)
            .with_charge(-100.0)
            .with_appearance(Appearance {
                color: Some("blue".to_string()),
                shape: Shape::Circle,
                trail: false,
            }),
    );
    world
        .fields
        .push(Field::with_constant(FieldKind::Electrostatic, 100.0, vec![0, 1]));

    Ok(Scenario {
        label: "charges",
        sim: Simulation::new(world, 0.03, 0.0)?,
        ticks_per_frame: 1,
        tick_pacing: Duration::ZERO,
        grid: Some(GridSpec {
            field: 0,
            spacing: 20.0,
        }),
    })
}
