// src/animation/frame_driver.rs
//
// The repeating timer behind a running transition.
// Host frames feed elapsed time in; whole intervals come out as ticks.

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum DriverState {
    #[default]
    Idle,
    Running,
}

pub trait FrameScheduler {
    /// Idle -> Running. No-op when already running.
    fn start(&mut self);
    /// Running -> Idle. No-op when already idle.
    fn stop(&mut self);
    fn is_running(&self) -> bool;
    /// Number of ticks due after `dt` seconds. Always 0 while idle.
    fn poll(&mut self, dt: f32) -> u32;
}

#[derive(Debug, Clone)]
pub struct IntervalDriver {
    state: DriverState,
    interval: f32,
    frame_timer: f32,
    timers_started: usize,
}

impl IntervalDriver {
    pub fn new(interval: f32) -> Self {
        Self {
            state: DriverState::Idle,
            interval,
            frame_timer: 0.0,
            timers_started: 0,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// How many times the driver has gone from idle to running.
    pub fn timers_started(&self) -> usize {
        self.timers_started
    }
}

impl FrameScheduler for IntervalDriver {
    fn start(&mut self) {
        if self.state == DriverState::Running {
            return;
        }
        self.state = DriverState::Running;
        self.frame_timer = 0.0;
        self.timers_started += 1;
    }

    fn stop(&mut self) {
        self.state = DriverState::Idle;
        self.frame_timer = 0.0;
    }

    fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    fn poll(&mut self, dt: f32) -> u32 {
        if self.state == DriverState::Idle {
            return 0;
        }

        self.frame_timer += dt;
        let mut ticks = 0;
        while self.frame_timer >= self.interval {
            self.frame_timer -= self.interval;
            ticks += 1;
        }
        ticks
    }
}
