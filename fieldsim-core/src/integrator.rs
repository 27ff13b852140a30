use crate::engine::World;
use crate::field::FieldError;
use glam::Vec2;

/// Step the simulation forward by dt using semi-implicit Euler integration.
///
/// All forces are computed into a snapshot before any body moves, so results
/// do not depend on body order even when bodies act as sources of each
/// other's fields.
pub fn step(world: &mut World, dt: f32) -> Result<(), FieldError> {
    let forces: Vec<Vec2> = (0..world.bodies.len())
        .map(|i| world.compute_force(i))
        .collect::<Result<_, _>>()?;

    // Semi-implicit Euler: v += a*dt first, then x += v*dt with the new v.
    // The ordering matters for the oscillator scenarios.
    for (body, force) in world.bodies.iter_mut().zip(forces) {
        let accel = force / body.mass;
        body.vel += accel * dt;
        body.pos += body.vel * dt;
    }
    Ok(())
}
