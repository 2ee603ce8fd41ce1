pub mod animation_state;
pub mod frame_driver;
pub mod node_chain;
pub mod scale_util;

pub use animation_state::AnimationState;
pub use frame_driver::{DriverState, FrameScheduler, IntervalDriver};
pub use node_chain::{ChainDirection, NodeChain};

/// Result of advancing an animation by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    InProgress,
    Committed,
}
