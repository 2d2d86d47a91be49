use glam::{Mat4, Vec3};

use super::node::{Node, NodeId};
use crate::error::SceneError;
use crate::math::{intersect_aabb, Aabb, Ray, Transform};
use crate::traits::SceneGraph;

/// Arena-backed scene graph.
///
/// Nodes are never freed; removing a child only detaches it. Nodes reachable
/// from an anchor are "in the scene", everything else (templates, fresh
/// clones) lives detached in the same arena.
#[derive(Debug, Default)]
pub struct Scene {
    nodes: Vec<Node>,
    anchors: Vec<NodeId>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a detached node
    pub fn insert(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent: None,
            children: Vec::new(),
            ..node
        });
        id
    }

    /// Create an anchor fixed at `world` and register it as a scene root
    pub fn add_anchor(&mut self, name: impl Into<String>, world: Mat4) -> NodeId {
        let mut node = Node::new(name);
        node.transform = Transform::from_matrix(world);
        let id = self.insert(node);
        self.anchors.push(id);
        id
    }

    pub fn anchors(&self) -> &[NodeId] {
        &self.anchors
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    fn get(&self, id: NodeId) -> Result<&Node, SceneError> {
        self.nodes.get(id.0).ok_or(SceneError::UnknownNode(id))
    }

    fn get_mut(&mut self, id: NodeId) -> Result<&mut Node, SceneError> {
        self.nodes.get_mut(id.0).ok_or(SceneError::UnknownNode(id))
    }

    pub fn children(&self, id: NodeId) -> Result<&[NodeId], SceneError> {
        Ok(self.get(id)?.children())
    }

    /// `id` and all its descendants, depth first, parents before children
    pub fn descendants(&self, id: NodeId) -> Result<Vec<NodeId>, SceneError> {
        self.get(id)?;
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.nodes[next.0].children.iter().rev().copied());
        }
        Ok(out)
    }

    fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(id), move |n| self.nodes.get(n.0).and_then(|node| node.parent))
    }

    /// Root of the tree `id` belongs to
    pub fn root_of(&self, id: NodeId) -> Result<NodeId, SceneError> {
        self.get(id)?;
        Ok(self.ancestors(id).last().unwrap_or(id))
    }

    /// Reachable from one of the anchors
    pub fn is_in_scene(&self, id: NodeId) -> bool {
        self.root_of(id)
            .map(|root| self.anchors.contains(&root))
            .unwrap_or(false)
    }

    /// Enabled and every ancestor enabled
    pub fn is_active(&self, id: NodeId) -> bool {
        self.node(id).is_some() && self.ancestors(id).all(|n| self.nodes[n.0].enabled)
    }

    pub fn world_matrix(&self, id: NodeId) -> Result<Mat4, SceneError> {
        self.get(id)?;
        Ok(self
            .ancestors(id)
            .fold(Mat4::IDENTITY, |acc, n| self.nodes[n.0].transform.matrix() * acc))
    }

    /// Collision shape in world space, if the node has one
    pub fn world_collision(&self, id: NodeId) -> Option<Aabb> {
        let shape = self.node(id)?.collision?;
        let world = self.world_matrix(id).ok()?;
        Some(shape.transformed(&world))
    }

    /// Nearest active, in-scene node whose collision shape the ray hits
    pub fn pick(&self, ray: &Ray) -> Option<(NodeId, f32)> {
        self.anchors
            .iter()
            .flat_map(|&anchor| self.descendants(anchor).unwrap_or_default())
            .filter(|&id| self.is_active(id))
            .filter_map(|id| {
                let bounds = self.world_collision(id)?;
                intersect_aabb(ray, &bounds).map(|t| (id, t))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }

    fn detach(&mut self, child: NodeId) {
        if let Some(parent) = self.nodes[child.0].parent.take() {
            self.nodes[parent.0].children.retain(|&c| c != child);
        }
    }

    fn clone_subtree(&mut self, source: NodeId, parent: Option<NodeId>) -> NodeId {
        let copy = Node {
            parent,
            children: Vec::new(),
            ..self.nodes[source.0].clone()
        };
        let id = NodeId(self.nodes.len());
        self.nodes.push(copy);

        let children = self.nodes[source.0].children.clone();
        for child in children {
            let cloned = self.clone_subtree(child, Some(id));
            self.nodes[id.0].children.push(cloned);
        }
        id
    }
}

impl SceneGraph for Scene {
    fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), SceneError> {
        self.get(parent)?;
        self.get(child)?;
        if self.ancestors(parent).any(|n| n == child) {
            return Err(SceneError::Cycle { parent, child });
        }
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        Ok(())
    }

    fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), SceneError> {
        self.get(parent)?;
        if self.get(child)?.parent != Some(parent) {
            return Err(SceneError::NotAChild { parent, child });
        }
        self.detach(child);
        Ok(())
    }

    fn parent(&self, node: NodeId) -> Result<Option<NodeId>, SceneError> {
        Ok(self.get(node)?.parent)
    }

    fn name(&self, node: NodeId) -> Result<&str, SceneError> {
        Ok(&self.get(node)?.name)
    }

    fn set_name(&mut self, node: NodeId, name: String) -> Result<(), SceneError> {
        self.get_mut(node)?.name = name;
        Ok(())
    }

    fn is_enabled(&self, node: NodeId) -> Result<bool, SceneError> {
        Ok(self.get(node)?.enabled)
    }

    fn set_enabled(&mut self, node: NodeId, enabled: bool) -> Result<(), SceneError> {
        self.get_mut(node)?.enabled = enabled;
        Ok(())
    }

    fn local_transform(&self, node: NodeId) -> Result<Transform, SceneError> {
        Ok(self.get(node)?.transform)
    }

    fn set_local_transform(&mut self, node: NodeId, transform: Transform) -> Result<(), SceneError> {
        self.get_mut(node)?.transform = transform;
        Ok(())
    }

    fn transform_matrix(&self, node: NodeId, relative_to: Option<NodeId>) -> Result<Mat4, SceneError> {
        let world = self.world_matrix(node)?;
        match relative_to {
            Some(reference) => Ok(self.world_matrix(reference)?.inverse() * world),
            None => Ok(world),
        }
    }

    fn set_transform_matrix(
        &mut self,
        node: NodeId,
        matrix: Mat4,
        relative_to: Option<NodeId>,
    ) -> Result<(), SceneError> {
        let target_world = match relative_to {
            Some(reference) => self.world_matrix(reference)? * matrix,
            None => matrix,
        };
        let parent_world = match self.get(node)?.parent {
            Some(parent) => self.world_matrix(parent)?,
            None => Mat4::IDENTITY,
        };
        let local = parent_world.inverse() * target_world;
        self.get_mut(node)?.transform = Transform::from_matrix(local);
        Ok(())
    }

    fn clone_recursive(&mut self, source: NodeId) -> Result<NodeId, SceneError> {
        self.get(source)?;
        Ok(self.clone_subtree(source, None))
    }

    fn generate_collision_shapes(&mut self, node: NodeId, recursive: bool) -> Result<(), SceneError> {
        let targets = if recursive {
            self.descendants(node)?
        } else {
            self.get(node)?;
            vec![node]
        };
        for id in targets {
            let n = &mut self.nodes[id.0];
            if let Some(bounds) = n.mesh_bounds {
                n.collision = Some(bounds);
            }
        }
        Ok(())
    }

    fn mark_instance(&mut self, node: NodeId, index: u64) -> Result<(), SceneError> {
        self.get_mut(node)?.instance = Some(index);
        Ok(())
    }

    fn instance_index(&self, node: NodeId) -> Result<Option<u64>, SceneError> {
        Ok(self.get(node)?.instance)
    }
}

/// Mesh node with a box of the given half extents centered at `offset`
pub fn box_part(name: impl Into<String>, offset: Vec3, half_extents: Vec3) -> Node {
    let mut node = Node::with_mesh(name, Aabb::from_center(Vec3::ZERO, half_extents));
    node.transform = Transform::from_translation(offset);
    node
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> (Scene, NodeId, NodeId, NodeId) {
        let mut scene = Scene::new();
        let root = scene.insert(Node::new("root"));
        let a = scene.insert(box_part("a", Vec3::X, Vec3::splat(0.5)));
        let b = scene.insert(box_part("b", Vec3::Y, Vec3::splat(0.25)));
        scene.add_child(root, a).unwrap();
        scene.add_child(a, b).unwrap();
        (scene, root, a, b)
    }

    #[test]
    fn test_descendants_preorder() {
        let (scene, root, a, b) = tree();
        assert_eq!(scene.descendants(root).unwrap(), vec![root, a, b]);
    }

    #[test]
    fn test_cycle_rejected() {
        let (mut scene, root, _a, b) = tree();
        assert_eq!(
            scene.add_child(b, root),
            Err(SceneError::Cycle { parent: b, child: root })
        );
    }

    #[test]
    fn test_reparent_detaches() {
        let (mut scene, root, a, b) = tree();
        scene.add_child(root, b).unwrap();
        assert!(scene.children(a).unwrap().is_empty());
        assert_eq!(scene.children(root).unwrap(), &[a, b]);
    }

    #[test]
    fn test_world_matrix_composes() {
        let (scene, _root, _a, b) = tree();
        let world = scene.world_matrix(b).unwrap();
        assert!(world.transform_point3(Vec3::ZERO).abs_diff_eq(Vec3::new(1.0, 1.0, 0.0), 1e-5));
    }

    #[test]
    fn test_clone_is_deep() {
        let (mut scene, root, a, _b) = tree();
        let copy = scene.clone_recursive(root).unwrap();
        let copied = scene.descendants(copy).unwrap();
        assert_eq!(copied.len(), 3);
        assert!(!copied.contains(&a));

        scene.set_name(copied[1], "renamed".into()).unwrap();
        assert_eq!(scene.name(a).unwrap(), "a");
        assert_eq!(scene.parent(copy).unwrap(), None);
    }

    #[test]
    fn test_unknown_node() {
        let scene = Scene::new();
        assert_eq!(scene.name(NodeId(3)), Err(SceneError::UnknownNode(NodeId(3))));
    }

    #[test]
    fn test_remove_child_requires_parent() {
        let (mut scene, root, _a, b) = tree();
        assert_eq!(
            scene.remove_child(root, b),
            Err(SceneError::NotAChild { parent: root, child: b })
        );
    }
}
