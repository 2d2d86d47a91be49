mod graph;
mod node;

pub use graph::{box_part, Scene};
pub use node::{Node, NodeId};
