use glam::Vec2;

use crate::scene::NodeId;

/// Resolve a screen point to the nearest entity with a collision shape
pub trait EntityQuery {
    fn entity_at(&self, screen_point: Vec2) -> Option<NodeId>;
}
