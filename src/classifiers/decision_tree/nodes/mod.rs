mod node_id;
mod tree_node;

pub use node_id::NodeId;
pub use tree_node::TreeNode;
