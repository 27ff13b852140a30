//! Fixed-timestep simulation driver.

use crate::canvas::{Canvas, MarkerId};
use crate::engine::{ForceLaw, World};
use crate::field::FieldError;
use crate::integrator::step;
use glam::Vec2;
use std::time::Duration;
use thiserror::Error;

/// Error raised while assembling or presenting a simulation
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("body '{name}' has non-positive mass {mass}")]
    InvalidMass { name: String, mass: f32 },
    #[error("time step must be positive, got {0}")]
    InvalidTimeStep(f32),
    #[error("body '{name}' is driven by unknown field {field}")]
    UnknownField { name: String, field: usize },
    #[error("field {field} lists unknown source body {body}")]
    UnknownSource { field: usize, body: usize },
    #[error("field grid spacing must be positive, got {0}")]
    InvalidGridSpacing(f32),
    #[error(transparent)]
    Field(#[from] FieldError),
}

/// Driver state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimState {
    Running,
    Finished,
}

/// Fixed-timestep driver that owns its world for the length of a run.
///
/// The tick count is fixed up front as `ceil(total_time / time_step)` and
/// elapsed time is derived from it, so the per-tick increment is exactly
/// `time_step` with no floating-point accumulation on the loop condition.
#[derive(Debug)]
pub struct Simulation {
    pub world: World,
    pub time_step: f32,
    pub total_time: f32,
    pub current_step: u32,
    pub max_steps: u32,
    markers: Vec<MarkerId>,
}

impl Simulation {
    /// Build a driver over `world`, validating everything that would
    /// otherwise fault mid-run: positive masses, a positive time step, and
    /// in-range field and source indices.
    pub fn new(world: World, time_step: f32, total_time: f32) -> Result<Self, SetupError> {
        if !(time_step > 0.0) {
            return Err(SetupError::InvalidTimeStep(time_step));
        }
        for body in &world.bodies {
            if !(body.mass > 0.0) {
                return Err(SetupError::InvalidMass {
                    name: body.name.clone(),
                    mass: body.mass,
                });
            }
            if let ForceLaw::FieldDriven { field } = body.law {
                if field >= world.fields.len() {
                    return Err(SetupError::UnknownField {
                        name: body.name.clone(),
                        field,
                    });
                }
            }
        }
        for (field_idx, field) in world.fields.iter().enumerate() {
            for &body in &field.sources {
                if body >= world.bodies.len() {
                    return Err(SetupError::UnknownSource {
                        field: field_idx,
                        body,
                    });
                }
            }
        }

        let max_steps = (total_time / time_step).ceil().max(0.0) as u32;
        log::debug!(
            "simulation of {} bodies: dt = {}, {} ticks",
            world.bodies.len(),
            time_step,
            max_steps
        );

        Ok(Self {
            world,
            time_step,
            total_time,
            current_step: 0,
            max_steps,
            markers: Vec::new(),
        })
    }

    pub fn state(&self) -> SimState {
        if self.current_step >= self.max_steps {
            SimState::Finished
        } else {
            SimState::Running
        }
    }

    /// Simulated time elapsed so far.
    pub fn elapsed_time(&self) -> f32 {
        self.current_step as f32 * self.time_step
    }

    /// Create one canvas marker per body, in body order.
    pub fn attach_markers(&mut self, canvas: &mut dyn Canvas) {
        self.markers = self
            .world
            .bodies
            .iter()
            .map(|body| {
                canvas.create_marker(
                    body.pos,
                    body.appearance.color.as_deref(),
                    body.appearance.shape,
                    body.appearance.trail,
                )
            })
            .collect();
    }
}

/// Advance the simulation by one tick and notify the canvas of every body's
/// new position.
///
/// Returns `true` once the simulation has finished; calling again after that
/// is a no-op (no integration, no marker movement).
pub fn step_simulation(sim: &mut Simulation, canvas: &mut dyn Canvas) -> Result<bool, FieldError> {
    if sim.state() == SimState::Finished {
        return Ok(true);
    }

    step(&mut sim.world, sim.time_step)?;
    sim.current_step += 1;

    for (body, &marker) in sim.world.bodies.iter().zip(&sim.markers) {
        canvas.move_marker(marker, body.pos);
    }
    log::trace!("sim time: {:.4}", sim.elapsed_time());

    Ok(sim.state() == SimState::Finished)
}

/// Run the simulation to completion.
///
/// `tick_pacing` is a purely cosmetic sleep between ticks with no effect on
/// the physics.
pub fn run_simulation(
    sim: &mut Simulation,
    canvas: &mut dyn Canvas,
    tick_pacing: Duration,
) -> Result<(), FieldError> {
    while !step_simulation(sim, canvas)? {
        if !tick_pacing.is_zero() {
            std::thread::sleep(tick_pacing);
        }
    }
    Ok(())
}

/// Sample a field on a grid spanning the canvas extent, drawing one segment
/// from each sample point to `point + value`.
pub fn draw_field_grid(
    world: &World,
    field_idx: usize,
    spacing: f32,
    canvas: &mut dyn Canvas,
) -> Result<(), SetupError> {
    if !(spacing > 0.0) {
        return Err(SetupError::InvalidGridSpacing(spacing));
    }

    let field = &world.fields[field_idx];
    let (width, height) = canvas.screen_extent();

    let mut x = -width / 2.0;
    while x < width / 2.0 {
        let mut y = -height / 2.0;
        while y < height / 2.0 {
            let point = Vec2::new(x, y);
            let value = field.value_at(point, &world.bodies)?;
            canvas.draw_segment(point, point + value);
            y += spacing;
        }
        x += spacing;
    }
    Ok(())
}
