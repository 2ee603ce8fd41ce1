// src/draw/surface.rs
//
// The drawing capabilities the scene needs from its host.
// Coordinates are nannou's: origin at the window center, y up.

use nannou::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectSpec {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Translate, then scale. A negative scale axis reflects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceTransform {
    pub translation: Vec2,
    pub scale: Vec2,
}

impl Default for SurfaceTransform {
    fn default() -> Self {
        Self {
            translation: Vec2::ZERO,
            scale: Vec2::ONE,
        }
    }
}

impl SurfaceTransform {
    pub fn reflect_x(sign: f32) -> Self {
        Self {
            scale: vec2(sign, 1.0),
            ..Default::default()
        }
    }

    pub fn apply_to_point(&self, point: Vec2) -> Vec2 {
        point * self.scale + self.translation
    }
}

pub trait Surface {
    fn clear(&mut self, color: Rgb);
    fn draw_rect(&mut self, rect: RectSpec, color: Rgb);
    fn push_transform(&mut self, transform: SurfaceTransform);
    fn pop_transform(&mut self);

    /// Runs `f` with `transform` applied and restores the previous transform afterwards.
    fn with_transform<F>(&mut self, transform: SurfaceTransform, f: F)
    where
        Self: Sized,
        F: FnOnce(&mut Self),
    {
        self.push_transform(transform);
        f(self);
        self.pop_transform();
    }
}

/// Surface over a nannou `Draw`. Each pushed transform is a derived `Draw`.
pub struct NannouSurface {
    stack: Vec<Draw>,
}

impl NannouSurface {
    pub fn new(draw: &Draw) -> Self {
        Self {
            stack: vec![draw.clone()],
        }
    }

    fn top(&self) -> &Draw {
        // the base draw is never popped
        &self.stack[self.stack.len() - 1]
    }
}

impl Surface for NannouSurface {
    fn clear(&mut self, color: Rgb) {
        self.top().background().color(color);
    }

    fn draw_rect(&mut self, rect: RectSpec, color: Rgb) {
        self.top()
            .rect()
            .x_y(rect.x, rect.y)
            .w_h(rect.w, rect.h)
            .color(color);
    }

    fn push_transform(&mut self, transform: SurfaceTransform) {
        let draw = self
            .top()
            .translate(transform.translation.extend(0.0))
            .scale_axes(transform.scale.extend(1.0));
        self.stack.push(draw);
    }

    fn pop_transform(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        } else {
            log::warn!("pop_transform called without a matching push");
        }
    }
}


#[cfg(test)]
mod tests {
    use super::recording::*;
    use super::*;

    #[test]
    fn test_transform_translates_then_scales() {
        let transform = SurfaceTransform {
            translation: vec2(10.0, 5.0),
            scale: vec2(-1.0, 2.0),
        };
        let point = transform.apply_to_point(vec2(3.0, 4.0));
        assert_eq!(point, vec2(7.0, 13.0));
    }

    #[test]
    fn test_with_transform_restores_stack() {
        let mut surface = RecordingSurface::default();
        surface.with_transform(SurfaceTransform::reflect_x(-1.0), |s| {
            s.with_transform(SurfaceTransform::default(), |s| {
                assert_eq!(s.depth(), 2);
            });
            s.draw_rect(
                RectSpec {
                    x: 5.0,
                    y: 0.0,
                    w: 2.0,
                    h: 2.0,
                },
                rgb(1.0, 0.0, 0.0),
            );
        });

        assert_eq!(surface.depth(), 0);
        assert_eq!(surface.max_depth, 2);

        let rects = surface.rects();
        assert_eq!(rects.len(), 1);
        assert_eq!(rects[0].0, vec2(-6.0, -1.0));
        assert_eq!(rects[0].1, vec2(-4.0, 1.0));
    }
}
