// src/animation/node_chain.rs
//
// The fixed row of boxes a tap walks through.
// Only the current node animates; the chain bounces between its two ends.

use super::{AnimationState, TickOutcome};

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum ChainDirection {
    #[default]
    Forward,
    Backward,
}

impl ChainDirection {
    pub fn flipped(self) -> Self {
        match self {
            ChainDirection::Forward => ChainDirection::Backward,
            ChainDirection::Backward => ChainDirection::Forward,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NodeChain {
    nodes: Vec<AnimationState>,
    current: usize,
    direction: ChainDirection,
}

impl NodeChain {
    /// Builds all `len` nodes up front. A chain always holds at least one node.
    pub fn new(len: usize, step: f32) -> Self {
        Self {
            nodes: (0..len.max(1)).map(|_| AnimationState::new(step)).collect(),
            current: 0,
            direction: ChainDirection::Forward,
        }
    }

    /// Neighbor of the current node in `dir`. At either end the chain turns
    /// around and stays where it is.
    pub fn get_next(&mut self, dir: ChainDirection) -> usize {
        let neighbor = match dir {
            ChainDirection::Forward => Some(self.current + 1).filter(|&i| i < self.nodes.len()),
            ChainDirection::Backward => self.current.checked_sub(1),
        };

        match neighbor {
            Some(index) => index,
            None => {
                self.direction = self.direction.flipped();
                self.current
            }
        }
    }

    pub fn update(&mut self) -> TickOutcome {
        let outcome = self.nodes[self.current].update();
        if outcome == TickOutcome::Committed {
            self.current = self.get_next(self.direction);
        }
        outcome
    }

    pub fn start_updating(&mut self) -> bool {
        self.nodes[self.current].start_updating()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_scale(&self) -> f32 {
        self.nodes[self.current].scale()
    }

    pub fn direction(&self) -> ChainDirection {
        self.direction
    }

    pub fn node(&self, index: usize) -> Option<&AnimationState> {
        self.nodes.get(index)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: f32 = 0.02 / 3.0;

    fn run_transition(chain: &mut NodeChain) {
        assert!(chain.start_updating());
        for _ in 0..10_000 {
            if chain.update() == TickOutcome::Committed {
                return;
            }
        }
        panic!("transition never committed");
    }

    #[test]
    fn test_new_chain_starts_at_head() {
        let chain = NodeChain::new(5, STEP);
        assert_eq!(chain.len(), 5);
        assert_eq!(chain.current_index(), 0);
        assert_eq!(chain.direction(), ChainDirection::Forward);
        assert_eq!(chain.current_scale(), 0.0);
    }

    #[test]
    fn test_zero_length_chain_gets_one_node() {
        let chain = NodeChain::new(0, STEP);
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn test_get_next_moves_inside_chain() {
        let mut chain = NodeChain::new(5, STEP);
        assert_eq!(chain.get_next(ChainDirection::Forward), 1);
        assert_eq!(chain.direction(), ChainDirection::Forward);
    }

    #[test]
    fn test_get_next_at_head_flips() {
        let mut chain = NodeChain::new(5, STEP);
        chain.direction = ChainDirection::Backward;

        assert_eq!(chain.get_next(ChainDirection::Backward), 0);
        assert_eq!(chain.direction(), ChainDirection::Forward);
    }

    #[test]
    fn test_get_next_at_tail_flips() {
        let mut chain = NodeChain::new(5, STEP);
        chain.current = 4;

        assert_eq!(chain.get_next(ChainDirection::Forward), 4);
        assert_eq!(chain.direction(), ChainDirection::Backward);
    }

    #[test]
    fn test_single_node_chain_bounces_in_place() {
        let mut chain = NodeChain::new(1, STEP);
        run_transition(&mut chain);
        assert_eq!(chain.current_index(), 0);
        assert_eq!(chain.direction(), ChainDirection::Backward);
        assert_eq!(chain.node(0).unwrap().committed_scale(), 1.0);

        run_transition(&mut chain);
        assert_eq!(chain.current_index(), 0);
        assert_eq!(chain.direction(), ChainDirection::Forward);
        assert_eq!(chain.node(0).unwrap().committed_scale(), 0.0);
    }

    #[test]
    fn test_update_only_moves_current_node() {
        let mut chain = NodeChain::new(3, STEP);
        chain.start_updating();
        chain.update();
        assert!(chain.current_scale() > 0.0);
        assert_eq!(chain.node(1).unwrap().scale(), 0.0);
        assert_eq!(chain.node(2).unwrap().scale(), 0.0);
    }

    #[test]
    fn test_chain_bounces_between_ends() {
        let mut chain = NodeChain::new(5, STEP);
        let mut visited = vec![chain.current_index()];
        for _ in 0..11 {
            run_transition(&mut chain);
            visited.push(chain.current_index());
        }

        // the end nodes run twice: once to break down, once to reassemble
        assert_eq!(visited, vec![0, 1, 2, 3, 4, 4, 3, 2, 1, 0, 0, 1]);

        // every node has been closed again on the way back
        for i in 0..5 {
            let expected = if i == 0 { 1.0 } else { 0.0 };
            assert_eq!(chain.node(i).unwrap().committed_scale(), expected);
        }
    }
}
