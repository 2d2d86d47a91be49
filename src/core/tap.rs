use glam::Vec2;
use log::debug;

use super::size_class::{status_message, SizeClass};
use crate::scene::NodeId;
use crate::traits::{EntityQuery, SceneGraph};

/// What a tap landed on
#[derive(Debug, Clone, PartialEq)]
pub enum TapTarget {
    Nothing,
    /// Something pickable that is not part of a spawned instance
    Entity(NodeId),
    Instance {
        /// The node whose collision shape was hit
        entity: NodeId,
        /// The instance root owning that node
        instance: NodeId,
        name: String,
        index: u64,
    },
}

impl TapTarget {
    /// Status line for a tapped instance. Shows the running spawn count and
    /// classifies the scale control's current value, not the scale the
    /// instance was spawned with.
    pub fn status(&self, display_name: &str, spawn_count: u64, current_scale: f32) -> Option<String> {
        match self {
            TapTarget::Instance { .. } => Some(status_message(
                display_name,
                spawn_count,
                SizeClass::classify(current_scale),
            )),
            TapTarget::Nothing | TapTarget::Entity(_) => None,
        }
    }
}

pub fn resolve_tap<Q, S>(picker: &Q, scene: &S, screen_point: Vec2) -> TapTarget
where
    Q: EntityQuery + ?Sized,
    S: SceneGraph + ?Sized,
{
    let Some(entity) = picker.entity_at(screen_point) else {
        debug!("tap at {screen_point} hit nothing");
        return TapTarget::Nothing;
    };

    let mut current = Some(entity);
    while let Some(node) = current {
        if let Ok(Some(index)) = scene.instance_index(node) {
            let name = scene.name(node).unwrap_or_default().to_string();
            debug!("tap at {screen_point} hit instance {name}");
            return TapTarget::Instance {
                entity,
                instance: node,
                name,
                index,
            };
        }
        current = scene.parent(node).ok().flatten();
    }

    debug!("tap at {screen_point} hit non-instance {entity:?}");
    TapTarget::Entity(entity)
}
