use crate::field::{Field, FieldError};
use glam::Vec2;

/// Marker shape understood by the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Arrow,
    Circle,
    Square,
}

/// Presentation tags forwarded to the canvas when a body's marker is created
#[derive(Debug, Clone)]
pub struct Appearance {
    pub color: Option<String>,
    pub shape: Shape,
    /// Ask the canvas to trace the marker's path on subsequent moves.
    pub trail: bool,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            color: None,
            shape: Shape::Arrow,
            trail: false,
        }
    }
}

/// Force law attached to a body
#[derive(Debug, Clone)]
pub enum ForceLaw {
    /// No force; the body coasts.
    None,
    /// Fixed force vector.
    Constant(Vec2),
    /// Hooke spring along the x axis: F = (-k * pos.x, 0)
    Spring { k: f32 },
    /// Spring plus linear drag, both along the x axis only:
    /// F = (-k * pos.x - b * vel.x, 0). The y component is untouched, so a
    /// body launched sideways drifts while its x motion rings down.
    Damped { k: f32, b: f32 },
    /// Inverse-square pull toward the origin with strength gm = G * M_center.
    CentralGravity { gm: f32 },
    /// Force read from a field in the owning world, by field index. The
    /// coupling scalar is the body's mass for gravitational fields and its
    /// charge for electrostatic ones.
    FieldDriven { field: usize },
}

/// A point body in the physics simulation
#[derive(Debug, Clone)]
pub struct Body {
    pub name: String,
    pub pos: Vec2,
    pub vel: Vec2,
    pub mass: f32,
    /// Source strength for electrostatic fields; zero for uncharged bodies.
    pub charge: f32,
    pub appearance: Appearance,
    pub law: ForceLaw,
}

impl Body {
    pub fn new(name: impl Into<String>, pos: Vec2, vel: Vec2, mass: f32) -> Self {
        Self {
            name: name.into(),
            pos,
            vel,
            mass,
            charge: 0.0,
            appearance: Appearance::default(),
            law: ForceLaw::None,
        }
    }

    pub fn with_law(mut self, law: ForceLaw) -> Self {
        self.law = law;
        self
    }

    pub fn with_charge(mut self, charge: f32) -> Self {
        self.charge = charge;
        self
    }

    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }
}

/// The physics world containing bodies and fields
#[derive(Debug, Default)]
pub struct World {
    pub bodies: Vec<Body>,
    pub fields: Vec<Field>,
}

impl World {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Compute the net force on the body at the given index.
    ///
    /// Pure with respect to the current state: field-driven laws re-derive
    /// their field from live source positions on every call, so the
    /// integrator evaluates this exactly once per body per tick.
    pub fn compute_force(&self, body_idx: usize) -> Result<Vec2, FieldError> {
        let body = &self.bodies[body_idx];
        match &body.law {
            ForceLaw::None => Ok(Vec2::ZERO),
            ForceLaw::Constant(force) => Ok(*force),
            ForceLaw::Spring { k } => Ok(Vec2::new(-*k * body.pos.x, 0.0)),
            ForceLaw::Damped { k, b } => {
                Ok(Vec2::new(-*k * body.pos.x - *b * body.vel.x, 0.0))
            }
            ForceLaw::CentralGravity { gm } => {
                let d_sq = body.pos.length_squared();
                if d_sq > 0.0 {
                    // g = -gm / d^2 along the unit vector from the origin
                    let g = -gm / d_sq;
                    Ok(body.pos.normalize() * (body.mass * g))
                } else {
                    // Coincident with the center; excluded, not singular.
                    Ok(Vec2::ZERO)
                }
            }
            ForceLaw::FieldDriven { field } => {
                let field = &self.fields[*field];
                let value = field.value_at(body.pos, &self.bodies)?;
                Ok(value * field.coupling(body))
            }
        }
    }
}
