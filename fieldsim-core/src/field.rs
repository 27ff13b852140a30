use crate::engine::Body;
use glam::Vec2;
use thiserror::Error;

/// Error raised when a field is queried before being configured
#[derive(Debug, Error)]
pub enum FieldError {
    #[error("{0} field queried before its constant was configured")]
    NotConfigured(&'static str),
}

/// The physical law a field superposes over its sources
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Coulomb's law: k * q / d^2, pointing away from positive sources.
    Electrostatic,
    /// Newton's law of gravity: G * m / d^2, pointing toward every source.
    Gravitational,
}

impl FieldKind {
    fn label(self) -> &'static str {
        match self {
            FieldKind::Electrostatic => "electrostatic",
            FieldKind::Gravitational => "gravitational",
        }
    }
}

/// A vector field derived from a distribution of source bodies.
///
/// Sources are indices into the owning world's body arena. The field holds no
/// state beyond its constant; every query is re-derived from live source
/// positions, so moving a source immediately changes subsequent values and no
/// invalidation logic is needed.
#[derive(Debug, Clone)]
pub struct Field {
    pub kind: FieldKind,
    constant: Option<f32>,
    pub sources: Vec<usize>,
}

impl Field {
    /// An unconfigured field; queries fail until `configure` is called.
    pub fn new(kind: FieldKind, sources: Vec<usize>) -> Self {
        Self {
            kind,
            constant: None,
            sources,
        }
    }

    /// A field with its constant set up front.
    pub fn with_constant(kind: FieldKind, constant: f32, sources: Vec<usize>) -> Self {
        Self {
            kind,
            constant: Some(constant),
            sources,
        }
    }

    /// Set Coulomb's k or Newton's G.
    pub fn configure(&mut self, constant: f32) {
        self.constant = Some(constant);
    }

    pub fn constant(&self) -> Option<f32> {
        self.constant
    }

    /// Scalar a field-driven body multiplies the field value by to get force.
    pub fn coupling(&self, body: &Body) -> f32 {
        match self.kind {
            FieldKind::Electrostatic => body.charge,
            FieldKind::Gravitational => body.mass,
        }
    }

    /// Field value at `point`, superposed over all sources.
    ///
    /// A source at zero distance contributes the zero vector: bodies do not
    /// act on themselves, and coincident points are excluded rather than
    /// treated as singular. Summation order follows source order; it only
    /// affects bit-exact reproducibility, not correctness.
    pub fn value_at(&self, point: Vec2, bodies: &[Body]) -> Result<Vec2, FieldError> {
        let constant = self
            .constant
            .ok_or(FieldError::NotConfigured(self.kind.label()))?;

        let mut total = Vec2::ZERO;
        for &src_idx in &self.sources {
            let src = &bodies[src_idx];
            let r = point - src.pos;
            let d_sq = r.length_squared();
            if d_sq > 0.0 {
                let amount = match self.kind {
                    FieldKind::Electrostatic => constant * src.charge / d_sq,
                    FieldKind::Gravitational => -constant * src.mass / d_sq,
                };
                total += r.normalize() * amount;
            }
        }
        Ok(total)
    }
}
