//! The rendering boundary.
//!
//! The core never draws anything itself; it drives this trait with position
//! updates and line segments. Any GUI, terminal plot, or headless recorder
//! implementing it is substitutable.

use crate::engine::Shape;
use glam::Vec2;

/// Handle to a marker created on a canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerId(pub usize);

/// Minimal rendering contract the simulation drives
pub trait Canvas {
    /// Create a visible marker for a body. When `trail` is set the canvas
    /// should trace the marker's path on subsequent moves (pen down, in
    /// turtle terms).
    fn create_marker(
        &mut self,
        pos: Vec2,
        color: Option<&str>,
        shape: Shape,
        trail: bool,
    ) -> MarkerId;

    /// Move an existing marker to a new position.
    fn move_marker(&mut self, id: MarkerId, pos: Vec2);

    /// Draw a standalone line segment (used for field-grid vectors).
    fn draw_segment(&mut self, from: Vec2, to: Vec2);

    /// Presentation hint: coalesce this many ticks per redraw.
    fn batch_frames(&mut self, ticks_per_frame: u32);

    /// Drawable extent (width, height), centered on the origin.
    fn screen_extent(&self) -> (f32, f32);
}

/// Canvas that draws nothing; used for headless runs.
#[derive(Debug, Clone)]
pub struct NullCanvas {
    extent: (f32, f32),
    markers: usize,
}

impl NullCanvas {
    pub fn new(extent: (f32, f32)) -> Self {
        Self { extent, markers: 0 }
    }
}

impl Default for NullCanvas {
    fn default() -> Self {
        Self::new((400.0, 400.0))
    }
}

impl Canvas for NullCanvas {
    fn create_marker(
        &mut self,
        _pos: Vec2,
        _color: Option<&str>,
        _shape: Shape,
        _trail: bool,
    ) -> MarkerId {
        let id = MarkerId(self.markers);
        self.markers += 1;
        id
    }

    fn move_marker(&mut self, _id: MarkerId, _pos: Vec2) {}

    fn draw_segment(&mut self, _from: Vec2, _to: Vec2) {}

    fn batch_frames(&mut self, _ticks_per_frame: u32) {}

    fn screen_extent(&self) -> (f32, f32) {
        self.extent
    }
}
