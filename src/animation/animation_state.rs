// src/animation/animation_state.rs
//
// Per-node progress between the closed (0) and broken-down (1) shape.

use super::TickOutcome;

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    scale: f32,
    direction: f32, // -1, 0 or 1
    committed_scale: f32,
    step: f32,
}

impl AnimationState {
    pub fn new(step: f32) -> Self {
        Self {
            scale: 0.0,
            direction: 0.0,
            committed_scale: 0.0,
            step,
        }
    }

    /// Moves the scale one step. Commits once it has travelled a full unit.
    pub fn update(&mut self) -> TickOutcome {
        self.scale += self.direction * self.step;
        if (self.scale - self.committed_scale).abs() > 1.0 {
            self.scale = self.committed_scale + self.direction;
            self.direction = 0.0;
            self.committed_scale = self.scale;
            return TickOutcome::Committed;
        }
        TickOutcome::InProgress
    }

    /// Returns true if a new transition started; false while one is in flight.
    pub fn start_updating(&mut self) -> bool {
        if self.direction != 0.0 {
            return false;
        }
        self.direction = 1.0 - 2.0 * self.committed_scale;
        true
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn direction(&self) -> f32 {
        self.direction
    }

    pub fn committed_scale(&self) -> f32 {
        self.committed_scale
    }

    pub fn is_idle(&self) -> bool {
        self.direction == 0.0
    }
}
