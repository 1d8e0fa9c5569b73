// src/draw/hvb_draw.rs
// Computes the two line pairs and two balls for one node at a given
// progress, then issues the Nannou draw calls.

use nannou::prelude::*;

use super::{Canvas, DrawParams};
use crate::utilities::{ease, phase_progress};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: (f32, f32),
    pub end: (f32, f32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: (f32, f32),
    pub radius: f32,
}

/// Everything drawn for one node, in canvas coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct HvbGeometry {
    pub horizontal: [LineSegment; 2],
    pub vertical: [LineSegment; 2],
    pub balls: [Circle; 2],
    pub stroke_weight: f32,
}

impl HvbGeometry {
    pub fn compute(
        canvas: Canvas,
        scale: f32,
        parts: usize,
        stroke_factor: f32,
        radius_factor: f32,
    ) -> Self {
        let (w, h) = (canvas.width, canvas.height);
        let offset = canvas.min_side() / stroke_factor;
        let r = canvas.min_side() / radius_factor;

        let sf = ease(scale);
        let sf1 = phase_progress(sf, 0, parts);
        let sf2 = phase_progress(sf, 1, parts);
        let sf3 = phase_progress(sf, 2, parts);

        let x_start = offset;
        let x_dist = w - 2.0 * offset;
        let y_start = h - offset;
        let y_dist = h - 2.0 * offset;

        // pairs sit 2r apart, the bottom/left one flush with the stroke gap
        let horizontal = horizontal_pair(h - offset - 2.0 * r, r, x_start, x_dist * sf1);
        let vertical = vertical_pair(offset, r, y_start, -y_dist * sf1);

        let balls = [
            Circle {
                center: (x_start + r + (x_dist - 2.0 * r) * sf3, y_start - r),
                radius: r * sf2,
            },
            Circle {
                center: (offset + r, y_start - r - (y_dist - 2.0 * r) * sf3),
                radius: r * sf2,
            },
        ];

        Self {
            horizontal,
            vertical,
            balls,
            stroke_weight: offset,
        }
    }
}

fn horizontal_pair(y: f32, gap: f32, x_start: f32, x_len: f32) -> [LineSegment; 2] {
    [0.0, 1.0].map(|j| {
        let line_y = y + 2.0 * gap * j;
        LineSegment {
            start: (x_start, line_y),
            end: (x_start + x_len, line_y),
        }
    })
}

fn vertical_pair(x: f32, gap: f32, y_start: f32, y_len: f32) -> [LineSegment; 2] {
    [0.0, 1.0].map(|j| {
        let line_x = x + 2.0 * gap * j;
        LineSegment {
            start: (line_x, y_start),
            end: (line_x, y_start + y_len),
        }
    })
}

pub fn draw_hvb_node(draw: &Draw, canvas: Canvas, geometry: &HvbGeometry, color: Rgb<f32>) {
    let params = DrawParams {
        color,
        stroke_weight: geometry.stroke_weight,
    };

    for line in geometry.horizontal.iter().chain(geometry.vertical.iter()) {
        draw_line(draw, canvas, line, &params);
    }
    for ball in geometry.balls.iter() {
        draw_ball(draw, canvas, ball, &params);
    }
}

fn draw_line(draw: &Draw, canvas: Canvas, line: &LineSegment, params: &DrawParams) {
    let start = canvas.to_nannou(line.start.0, line.start.1);
    let end = canvas.to_nannou(line.end.0, line.end.1);

    draw.line()
        .points(start, end)
        .color(params.color)
        .stroke_weight(params.stroke_weight)
        .caps_round();
}

fn draw_ball(draw: &Draw, canvas: Canvas, ball: &Circle, params: &DrawParams) {
    // zero radius at the start and end of a sweep
    if ball.radius <= 0.0 {
        return;
    }
    let center = canvas.to_nannou(ball.center.0, ball.center.1);

    draw.ellipse()
        .x_y(center.x, center.y)
        .radius(ball.radius)
        .color(params.color);
}
