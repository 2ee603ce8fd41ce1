// src/draw/mod.rs
// The drawing module: the host surface seam and the box renderer that draws on it

pub mod box_draw;
pub mod surface;

pub use box_draw::{draw_node, BoxStyle};
pub use surface::{NannouSurface, RectSpec, Surface, SurfaceTransform};
