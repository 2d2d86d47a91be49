use glam::{Mat4, Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::camera::{Camera, Viewport};
use crate::math::intersect_plane;
use crate::traits::{RaycastAlignment, RaycastResult, RaycastTarget, SurfaceQuery};

/// Planes whose normal is within 45 degrees of vertical count as horizontal
const HORIZONTAL_NORMAL_MIN_Y: f32 = std::f32::consts::FRAC_1_SQRT_2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaneAlignment {
    Horizontal,
    Vertical,
}

impl PlaneAlignment {
    pub fn matches(self, filter: RaycastAlignment) -> bool {
        matches!(
            (self, filter),
            (_, RaycastAlignment::Any)
                | (PlaneAlignment::Horizontal, RaycastAlignment::Horizontal)
                | (PlaneAlignment::Vertical, RaycastAlignment::Vertical)
        )
    }
}

/// A real-world surface found by the tracker
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectedPlane {
    pub center: Vec3,
    pub normal: Vec3,
    /// Half size along the plane's local X and Z axes
    pub half_extents: Vec2,
}

impl DetectedPlane {
    pub fn new(center: Vec3, normal: Vec3, half_extents: Vec2) -> Self {
        Self {
            center,
            normal: normal.normalize_or(Vec3::Y),
            half_extents,
        }
    }

    pub fn alignment(&self) -> PlaneAlignment {
        if self.normal.y.abs() >= HORIZONTAL_NORMAL_MIN_Y {
            PlaneAlignment::Horizontal
        } else {
            PlaneAlignment::Vertical
        }
    }

    /// Rotation taking +Y onto the plane normal
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_arc(Vec3::Y, self.normal)
    }

    pub fn contains(&self, point: Vec3) -> bool {
        let rotation = self.rotation();
        let offset = point - self.center;
        offset.dot(rotation * Vec3::X).abs() <= self.half_extents.x
            && offset.dot(rotation * Vec3::Z).abs() <= self.half_extents.y
    }
}

/// Which alignments the session is configured to detect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaneDetection {
    pub horizontal: bool,
    pub vertical: bool,
}

impl PlaneDetection {
    pub const ALL: Self = Self {
        horizontal: true,
        vertical: true,
    };

    pub fn from_alignments(alignments: &[PlaneAlignment]) -> Self {
        Self {
            horizontal: alignments.contains(&PlaneAlignment::Horizontal),
            vertical: alignments.contains(&PlaneAlignment::Vertical),
        }
    }

    pub fn detects(&self, alignment: PlaneAlignment) -> bool {
        match alignment {
            PlaneAlignment::Horizontal => self.horizontal,
            PlaneAlignment::Vertical => self.vertical,
        }
    }
}

impl Default for PlaneDetection {
    fn default() -> Self {
        Self::ALL
    }
}

/// Simulated world-tracking session: a camera looking at a fixed set of planes
#[derive(Debug, Clone)]
pub struct TrackingSession {
    pub camera: Camera,
    pub viewport: Viewport,
    pub detection: PlaneDetection,
    planes: Vec<DetectedPlane>,
}

impl TrackingSession {
    pub fn new(camera: Camera, viewport: Viewport, detection: PlaneDetection) -> Self {
        Self {
            camera,
            viewport,
            detection,
            planes: Vec::new(),
        }
    }

    pub fn add_plane(&mut self, plane: DetectedPlane) -> usize {
        self.planes.push(plane);
        self.planes.len() - 1
    }

    /// Planes the session currently reports, honoring the detection setting
    pub fn planes(&self) -> impl Iterator<Item = (usize, &DetectedPlane)> {
        self.planes
            .iter()
            .enumerate()
            .filter(|(_, p)| self.detection.detects(p.alignment()))
    }
}

impl SurfaceQuery for TrackingSession {
    fn raycast(
        &self,
        screen_point: Vec2,
        target: RaycastTarget,
        alignment: RaycastAlignment,
    ) -> Vec<RaycastResult> {
        let ray = self.camera.ray_through(screen_point, &self.viewport);

        let mut hits: Vec<RaycastResult> = self
            .planes()
            .filter(|(_, plane)| plane.alignment().matches(alignment))
            .filter_map(|(index, plane)| {
                let t = intersect_plane(&ray, plane.center, plane.normal)?;
                let point = ray.at(t);
                if target == RaycastTarget::ExistingPlaneGeometry && !plane.contains(point) {
                    return None;
                }
                Some(RaycastResult {
                    world_transform: Mat4::from_rotation_translation(plane.rotation(), point),
                    distance: t,
                    plane: index,
                })
            })
            .collect();

        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}
