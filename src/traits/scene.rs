use glam::Mat4;

use crate::error::SceneError;
use crate::math::Transform;
use crate::scene::NodeId;

/// Scene graph operations the core relies on.
///
/// Every mutation is effective immediately: a transform set during a frame
/// is what the next read in the same frame observes.
pub trait SceneGraph {
    /// Attach `child` under `parent`, detaching it from any previous parent.
    /// The child's local transform is kept as-is.
    fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), SceneError>;

    /// Detach `child` from `parent`. The node stays alive but leaves the scene.
    fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), SceneError>;

    fn parent(&self, node: NodeId) -> Result<Option<NodeId>, SceneError>;

    fn name(&self, node: NodeId) -> Result<&str, SceneError>;

    fn set_name(&mut self, node: NodeId, name: String) -> Result<(), SceneError>;

    fn is_enabled(&self, node: NodeId) -> Result<bool, SceneError>;

    fn set_enabled(&mut self, node: NodeId, enabled: bool) -> Result<(), SceneError>;

    fn local_transform(&self, node: NodeId) -> Result<Transform, SceneError>;

    fn set_local_transform(&mut self, node: NodeId, transform: Transform) -> Result<(), SceneError>;

    /// Transform of `node` expressed in the space of `relative_to`
    /// (world space when `None`)
    fn transform_matrix(&self, node: NodeId, relative_to: Option<NodeId>) -> Result<Mat4, SceneError>;

    /// Place `node` so that its transform in the space of `relative_to`
    /// (world space when `None`) equals `matrix`
    fn set_transform_matrix(
        &mut self,
        node: NodeId,
        matrix: Mat4,
        relative_to: Option<NodeId>,
    ) -> Result<(), SceneError>;

    /// Deep copy of `source` and all its descendants. The copy is detached.
    fn clone_recursive(&mut self, source: NodeId) -> Result<NodeId, SceneError>;

    /// Build collision shapes from mesh bounds so the node can be picked
    fn generate_collision_shapes(&mut self, node: NodeId, recursive: bool) -> Result<(), SceneError>;

    fn mark_instance(&mut self, node: NodeId, index: u64) -> Result<(), SceneError>;

    fn instance_index(&self, node: NodeId) -> Result<Option<u64>, SceneError>;
}
