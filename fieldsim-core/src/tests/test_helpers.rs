//! Test helper utilities shared by the integration tests

use crate::canvas::{Canvas, MarkerId};
use crate::engine::Shape;
use glam::Vec2;

/// Check if two f32 values are approximately equal within tolerance
pub fn approx_eq_f32(a: f32, b: f32, tol: f32) -> bool {
    (a - b).abs() <= tol
}

/// Check if two vectors are approximately equal within tolerance
pub fn approx_eq_vec2(a: Vec2, b: Vec2, tol: f32) -> bool {
    approx_eq_f32(a.x, b.x, tol) && approx_eq_f32(a.y, b.y, tol)
}

/// A marker recorded by `RecordingCanvas`
#[derive(Debug, Clone)]
pub struct RecordedMarker {
    pub pos: Vec2,
    pub color: Option<String>,
    pub shape: Shape,
    pub trail: bool,
    /// Every position this marker was moved to, in order.
    pub moves: Vec<Vec2>,
}

/// Canvas that records every call, for asserting on emission behavior
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    pub extent: (f32, f32),
    pub markers: Vec<RecordedMarker>,
    pub segments: Vec<(Vec2, Vec2)>,
    pub batch_hints: Vec<u32>,
}

impl RecordingCanvas {
    pub fn new(extent: (f32, f32)) -> Self {
        Self {
            extent,
            markers: Vec::new(),
            segments: Vec::new(),
            batch_hints: Vec::new(),
        }
    }

    /// Total move notifications across all markers
    pub fn total_moves(&self) -> usize {
        self.markers.iter().map(|m| m.moves.len()).sum()
    }
}

impl Canvas for RecordingCanvas {
    fn create_marker(
        &mut self,
        pos: Vec2,
        color: Option<&str>,
        shape: Shape,
        trail: bool,
    ) -> MarkerId {
        let id = MarkerId(self.markers.len());
        self.markers.push(RecordedMarker {
            pos,
            color: color.map(str::to_string),
            shape,
            trail,
            moves: Vec::new(),
        });
        id
    }

    fn move_marker(&mut self, id: MarkerId, pos: Vec2) {
        let marker = &mut self.markers[id.0];
        marker.pos = pos;
        marker.moves.push(pos);
    }

    fn draw_segment(&mut self, from: Vec2, to: Vec2) {
        self.segments.push((from, to));
    }

    fn batch_frames(&mut self, ticks_per_frame: u32) {
        self.batch_hints.push(ticks_per_frame);
    }

    fn screen_extent(&self) -> (f32, f32) {
        self.extent
    }
}
