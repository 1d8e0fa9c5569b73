// src/animation/node_chain.rs
//
// The fixed chain of animation nodes, one per palette color.
// Neighbours are index arithmetic over a fixed array; the cursor walks
// the chain one node per completed sweep and bounces at either end.

use log::{debug, info};

use super::progress::ProgressState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainDirection {
    Forward,
    Backward,
}

impl ChainDirection {
    pub fn reversed(self) -> Self {
        match self {
            ChainDirection::Forward => ChainDirection::Backward,
            ChainDirection::Backward => ChainDirection::Forward,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnimNode {
    pub index: usize,
    pub state: ProgressState,
}

impl AnimNode {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            state: ProgressState::new(),
        }
    }

    /// Neighbour index in `dir`, or None at the chain boundary
    pub fn neighbor(&self, dir: ChainDirection, len: usize) -> Option<usize> {
        match dir {
            ChainDirection::Forward if self.index + 1 < len => Some(self.index + 1),
            ChainDirection::Backward if self.index > 0 => Some(self.index - 1),
            _ => None,
        }
    }
}

/// Outcome of one tick of the chain
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChainStep {
    InFlight,
    Advanced { from: usize, to: usize },
    Reversed { at: usize, direction: ChainDirection },
}

impl ChainStep {
    pub fn is_complete(&self) -> bool {
        !matches!(self, ChainStep::InFlight)
    }
}

#[derive(Debug, Clone)]
pub struct NodeChain {
    nodes: Vec<AnimNode>,
    curr: usize,
    dir: ChainDirection,
}

impl NodeChain {
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "node chain needs at least one node");
        Self {
            nodes: (0..len).map(AnimNode::new).collect(),
            curr: 0,
            dir: ChainDirection::Forward,
        }
    }

    pub fn current(&self) -> &AnimNode {
        &self.nodes[self.curr]
    }

    pub fn node(&self, index: usize) -> &AnimNode {
        &self.nodes[index]
    }

    pub fn is_idle(&self) -> bool {
        self.current().state.is_idle()
    }

    pub fn start_updating(&mut self) -> bool {
        let started = self.nodes[self.curr].state.start_updating();
        if started {
            info!(
                "Sweep started on node {} ({:?})",
                self.curr, self.nodes[self.curr].state.dir
            );
        }
        started
    }

    pub fn update(&mut self, step: f32) -> ChainStep {
        let len = self.nodes.len();
        let node = &mut self.nodes[self.curr];
        if !node.state.update(step) {
            debug!("node {} scale {:.4}", node.index, node.state.scale);
            return ChainStep::InFlight;
        }

        match node.neighbor(self.dir, len) {
            Some(next) => {
                let from = self.curr;
                self.curr = next;
                info!("Sweep complete, node {} -> node {}", from, next);
                ChainStep::Advanced { from, to: next }
            }
            None => {
                self.dir = self.dir.reversed();
                info!(
                    "Sweep complete at chain end {}, now heading {:?}",
                    self.curr, self.dir
                );
                ChainStep::Reversed {
                    at: self.curr,
                    direction: self.dir,
                }
            }
        }
    }
}
