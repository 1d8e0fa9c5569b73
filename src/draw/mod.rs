// src/draw/mod.rs
// Geometry for the horizontal-vertical-ball motif and its Nannou draw calls

pub mod hvb_draw;

pub use hvb_draw::{draw_hvb_node, Circle, HvbGeometry, LineSegment};

use nannou::prelude::*;

#[derive(Debug, Clone)]
pub struct DrawParams {
    pub color: Rgb<f32>,
    pub stroke_weight: f32,
}

/// Canvas size in pixels. Canvas coordinates have their origin at the
/// top left with y growing downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.w(), rect.h())
    }

    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }

    /// Canvas coordinates to Nannou's centered, y-up space
    pub fn to_nannou(&self, x: f32, y: f32) -> Point2 {
        pt2(x - self.width / 2.0, self.height / 2.0 - y)
    }
}
