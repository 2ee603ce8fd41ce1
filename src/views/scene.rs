// src/views/scene.rs
//
// Owns the node chain and the frame driver.
// Taps start a transition, host frames advance it, commits stop the driver.

use log::{debug, info, warn};
use nannou::prelude::*;

use crate::animation::{FrameScheduler, IntervalDriver, NodeChain, TickOutcome};
use crate::config::Config;
use crate::draw::{draw_node, BoxStyle, Surface};

/// What happened during one host frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneUpdate {
    Idle,
    Ticked(u32),
    /// `node` finished its transition and `next` is now current.
    Committed { node: usize, next: usize },
}

impl SceneUpdate {
    pub fn needs_redraw(&self) -> bool {
        !matches!(self, SceneUpdate::Idle)
    }
}

pub struct Scene<D: FrameScheduler = IntervalDriver> {
    chain: NodeChain,
    driver: D,
    style: BoxStyle,
    background: Rgb,
    viewport: (f32, f32),
}

impl Scene<IntervalDriver> {
    pub fn new(config: &Config) -> Self {
        let driver = IntervalDriver::new(config.animation.tick_interval());
        Self::with_driver(config, driver)
    }
}

impl<D: FrameScheduler> Scene<D> {
    pub fn with_driver(config: &Config, driver: D) -> Self {
        let style = BoxStyle {
            palette: config.style.palette(),
            size_factor: config.style.size_factor,
            segment_count: config.animation.segment_count,
        };
        let chain = NodeChain::new(style.palette.len(), config.animation.scale_step());
        info!(
            "Scene ready: {} nodes, step {:.5}",
            chain.len(),
            config.animation.scale_step()
        );

        Self {
            chain,
            driver,
            style,
            background: config.style.background_color.color(),
            viewport: config.viewport(),
        }
    }

    pub fn render<S: Surface>(&self, surface: &mut S) {
        surface.clear(self.background);
        draw_node(
            surface,
            self.chain.current_index(),
            self.chain.current_scale(),
            &self.style,
            self.viewport,
        );
    }

    /// Returns true if the tap started a new transition.
    pub fn handle_tap(&mut self) -> bool {
        if !self.chain.start_updating() {
            debug!("Tap ignored, node {} is mid-transition", self.chain.current_index());
            return false;
        }
        debug!("Tap started node {}", self.chain.current_index());
        self.driver.start();
        true
    }

    /// Feeds `dt` seconds of host time to the driver and runs the ticks that are due.
    pub fn update(&mut self, dt: f32) -> SceneUpdate {
        let ticks = self.driver.poll(dt);
        if ticks == 0 {
            return SceneUpdate::Idle;
        }

        for _ in 0..ticks {
            let node = self.chain.current_index();
            if self.chain.update() == TickOutcome::Committed {
                self.driver.stop();
                let next = self.chain.current_index();
                info!("Node {} committed, current node is {}", node, next);
                return SceneUpdate::Committed { node, next };
            }
        }
        SceneUpdate::Ticked(ticks)
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            warn!("Ignoring resize to {}x{}", width, height);
            return;
        }
        self.viewport = (width, height);
    }

    pub fn chain(&self) -> &NodeChain {
        &self.chain
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn viewport(&self) -> (f32, f32) {
        self.viewport
    }

    pub fn is_animating(&self) -> bool {
        self.driver.is_running()
    }
}
