pub mod animator;
pub mod node_chain;
pub mod progress;

pub use animator::Animator;
pub use node_chain::{AnimNode, ChainDirection, ChainStep, NodeChain};
pub use progress::{ProgressState, Sweep};
