mod debug;
mod node;
mod play;
mod search;

pub use debug::{ChildStats, NodeStats};
pub use node::{Edge, Node, NodeId};
pub use play::SelectionPolicy;
pub use search::{random_playout, Mcts, SearchStats};
