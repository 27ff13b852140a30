pub mod canvas;
pub mod engine;
pub mod field;
pub mod integrator;
pub mod runtime;
pub mod scenario;

pub use canvas::{Canvas, MarkerId, NullCanvas};
pub use engine::{Appearance, Body, ForceLaw, Shape, World};
pub use field::{Field, FieldError, FieldKind};
pub use runtime::{
    draw_field_grid, run_simulation, step_simulation, SetupError, SimState, Simulation,
};
pub use scenario::{build, GridSpec, Scenario, ScenarioKind};

// Test helpers module (public for integration tests)
// Always compiled - integration tests are separate crates and need access
pub mod tests;
