use crate::math::{Aabb, Transform};

/// Index of a node inside a [`Scene`](super::Scene) arena
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A scene node. Geometry is represented only by its local bounds.
#[derive(Clone, Debug)]
pub struct Node {
    pub name: String,
    /// Relative to the parent, or to the world when detached
    pub transform: Transform,
    pub enabled: bool,
    /// Local bounds of the node's own mesh, if it has one
    pub mesh_bounds: Option<Aabb>,
    /// Local collision shape. Only nodes with one can be picked.
    pub collision: Option<Aabb>,
    /// Sequence number assigned when this node was spawned as an instance
    pub instance: Option<u64>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::IDENTITY,
            enabled: true,
            mesh_bounds: None,
            collision: None,
            instance: None,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn with_mesh(name: impl Into<String>, bounds: Aabb) -> Self {
        Self {
            mesh_bounds: Some(bounds),
            ..Self::new(name)
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}
