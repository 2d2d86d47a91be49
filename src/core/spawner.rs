use glam::Vec3;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use super::size_class::{status_message, SizeClass};
use crate::error::{ConfigError, SpawnError};
use crate::math::Transform;
use crate::scene::NodeId;
use crate::traits::{ObjectLibrary, SceneGraph};

/// What a spawn does while the cursor is hidden and its pose is stale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HiddenCursorPolicy {
    /// Refuse the spawn, nothing changes
    #[default]
    Reject,
    /// Place at the last pose the cursor had
    StalePose,
}

/// Monotonic instance sequence. Starts at 0, only ever moves up by one.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InstanceCounter {
    value: u64,
}

impl InstanceCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// Returns the value before the increment
    fn advance(&mut self) -> u64 {
        let previous = self.value;
        self.value += 1;
        previous
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpawnerSettings {
    /// Instance names are this prefix followed by the sequence number
    pub prefix: String,
    /// Name used in status messages
    pub display_name: String,
    pub hidden_cursor: HiddenCursorPolicy,
}

impl Default for SpawnerSettings {
    fn default() -> Self {
        Self {
            prefix: "MyClonedFirstRound_".to_string(),
            display_name: "Dera".to_string(),
            hidden_cursor: HiddenCursorPolicy::Reject,
        }
    }
}

/// A successfully placed instance
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub node: NodeId,
    pub name: String,
    pub index: u64,
    pub scale: f32,
    pub size: SizeClass,
    pub status: String,
    /// Placed while the cursor was hidden
    pub stale_pose: bool,
}

/// Clones the template at the cursor on every spawn trigger.
///
/// Owns the instance counter. Reads the cursor, never writes it.
#[derive(Debug)]
pub struct Spawner {
    template: NodeId,
    anchor: NodeId,
    cursor: NodeId,
    counter: InstanceCounter,
    settings: SpawnerSettings,
}

impl Spawner {
    /// Fails when the template is missing from the library; call at startup.
    pub fn new<L: ObjectLibrary + ?Sized>(
        library: &L,
        template_name: &str,
        anchor: NodeId,
        cursor: NodeId,
        settings: SpawnerSettings,
    ) -> Result<Self, ConfigError> {
        if settings.prefix.is_empty() {
            return Err(ConfigError::EmptyPrefix);
        }
        let template = library
            .find_template(template_name)
            .ok_or_else(|| ConfigError::TemplateNotFound(template_name.to_string()))?;

        Ok(Self {
            template,
            anchor,
            cursor,
            counter: InstanceCounter::new(),
            settings,
        })
    }

    pub fn counter(&self) -> &InstanceCounter {
        &self.counter
    }

    pub fn settings(&self) -> &SpawnerSettings {
        &self.settings
    }

    pub fn template(&self) -> NodeId {
        self.template
    }

    pub fn spawn<S: SceneGraph + ?Sized>(&mut self, scene: &mut S, scale: f32) -> Result<Placement, SpawnError> {
        if !scale.is_finite() || scale < 0.0 {
            return Err(SpawnError::InvalidScale(scale));
        }

        let stale_pose = !scene.is_enabled(self.cursor)?;
        if stale_pose {
            match self.settings.hidden_cursor {
                HiddenCursorPolicy::Reject => {
                    warn!("spawn ignored: cursor is not on a surface");
                    return Err(SpawnError::CursorHidden);
                }
                HiddenCursorPolicy::StalePose => {
                    warn!("cursor hidden, spawning at its last known pose");
                }
            }
        }
        let pose = scene.transform_matrix(self.cursor, Some(self.anchor))?;

        let index = self.counter.value();
        let node = scene.clone_recursive(self.template)?;

        let mut local = scene.local_transform(node)?;
        local.translation = Vec3::ZERO;
        scene.set_local_transform(node, local)?;

        let name = format!("{}{}", self.settings.prefix, index);
        scene.set_name(node, name.clone())?;

        // Picking only sees nodes with collision shapes
        scene.generate_collision_shapes(node, true)?;
        scene.mark_instance(node, index)?;

        // Local space of the anchor's children is the anchor's space
        let mut placed = Transform::from_matrix(pose);
        placed.scale = Vec3::splat(scale);
        scene.set_local_transform(node, placed)?;
        scene.add_child(self.anchor, node)?;

        self.counter.advance();

        let size = SizeClass::classify(scale);
        let status = status_message(&self.settings.display_name, index, size);
        info!("spawned {name} at scale {scale:.2} ({size})");

        Ok(Placement {
            node,
            name,
            index,
            scale,
            size,
            status,
            stale_pose,
        })
    }
}
