use crate::scene::NodeId;

/// Read-only store of prototype objects, looked up by name
pub trait ObjectLibrary {
    fn find_template(&self, name: &str) -> Option<NodeId>;
}
