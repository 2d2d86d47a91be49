use glam::{Mat4, Vec2, Vec3};
use log::debug;

use crate::error::SceneError;
use crate::math::Aabb;
use crate::scene::{Node, NodeId, Scene};
use crate::traits::{RaycastAlignment, RaycastTarget, SceneGraph, SurfaceQuery};

/// Outcome of one tracking step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CursorState {
    /// Pose relative to the world anchor
    Visible(Mat4),
    Hidden,
}

impl CursorState {
    pub fn is_visible(&self) -> bool {
        matches!(self, CursorState::Visible(_))
    }
}

/// Keeps the cursor on the nearest surface under a fixed screen point.
///
/// Sole writer of the cursor's pose and visibility. Holds no per-frame
/// state, so running it twice against the same surfaces is a no-op.
#[derive(Debug, Clone, Copy)]
pub struct CursorTracker {
    cursor: NodeId,
    anchor: NodeId,
    screen_point: Vec2,
}

impl CursorTracker {
    pub fn new(cursor: NodeId, anchor: NodeId, screen_point: Vec2) -> Self {
        Self {
            cursor,
            anchor,
            screen_point,
        }
    }

    pub fn cursor(&self) -> NodeId {
        self.cursor
    }

    pub fn screen_point(&self) -> Vec2 {
        self.screen_point
    }

    pub fn update<Q, S>(&self, surfaces: &Q, scene: &mut S) -> Result<CursorState, SceneError>
    where
        Q: SurfaceQuery + ?Sized,
        S: SceneGraph + ?Sized,
    {
        let hits = surfaces.raycast(
            self.screen_point,
            RaycastTarget::ExistingPlaneGeometry,
            RaycastAlignment::Any,
        );

        match hits.first() {
            Some(hit) => {
                let anchor_world = scene.transform_matrix(self.anchor, None)?;
                let pose = anchor_world.inverse() * hit.world_transform;
                scene.set_enabled(self.cursor, true)?;
                scene.set_transform_matrix(self.cursor, pose, Some(self.anchor))?;
                debug!("cursor on plane {} at {:.3}m", hit.plane, hit.distance);
                Ok(CursorState::Visible(pose))
            }
            None => {
                // Pose is left stale; readers must check visibility first
                scene.set_enabled(self.cursor, false)?;
                Ok(CursorState::Hidden)
            }
        }
    }
}

/// Flat square reticle under `anchor`, hidden until the first hit.
/// It gets no collision shape so taps pass through it.
pub fn make_cursor(scene: &mut Scene, anchor: NodeId) -> Result<NodeId, SceneError> {
    let reticle = Aabb::from_center(Vec3::ZERO, Vec3::new(0.1, 0.002, 0.1));
    let mut node = Node::with_mesh("Cursor", reticle);
    node.enabled = false;
    let cursor = scene.insert(node);
    scene.add_child(anchor, cursor)?;
    Ok(cursor)
}
