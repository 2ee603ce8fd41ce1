// src/draw/box_draw.rs
// Draws one node of the chain as a box split into a mirrored pair of halves.
// The halves slide apart, rise, and drop back as the node's scale runs 0 -> 1.

use nannou::prelude::*;

use crate::animation::scale_util::{divide_scale, sinify};
use crate::draw::{RectSpec, Surface, SurfaceTransform};

#[derive(Debug, Clone)]
pub struct BoxStyle {
    pub palette: Vec<Rgb>,
    pub size_factor: f32,
    pub segment_count: usize,
}

impl BoxStyle {
    pub fn color_for(&self, index: usize) -> Rgb {
        if self.palette.is_empty() {
            return rgb(0.0, 0.0, 0.0);
        }
        self.palette[index % self.palette.len()]
    }

    pub fn box_size(&self, viewport: (f32, f32)) -> f32 {
        viewport.0.min(viewport.1) / self.size_factor
    }
}

/// Slide, rise and fall offsets for a node at `scale`, each in [0, 1].
pub fn sub_scales(scale: f32, segment_count: usize) -> [f32; 3] {
    let sf = sinify(scale);
    [
        divide_scale(sf, 0, segment_count),
        divide_scale(sf, 1, segment_count),
        divide_scale(sf, 2, segment_count),
    ]
}

pub fn draw_node<S: Surface>(
    surface: &mut S,
    index: usize,
    scale: f32,
    style: &BoxStyle,
    viewport: (f32, f32),
) {
    let size = style.box_size(viewport);
    let [slide, rise, fall] = sub_scales(scale, style.segment_count);
    let color = style.color_for(index);

    let half = RectSpec {
        x: size / 4.0 + size * slide,
        y: size * (rise - fall),
        w: size / 2.0,
        h: size,
    };

    for j in 0..2 {
        let sign = 1.0 - 2.0 * j as f32;
        surface.with_transform(SurfaceTransform::reflect_x(sign), |s| {
            s.draw_rect(half, color);
        });
    }
}
