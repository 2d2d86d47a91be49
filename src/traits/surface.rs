use glam::{Mat4, Vec2};

/// Which plane geometry a raycast may hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaycastTarget {
    /// Only within the detected extent of each plane
    ExistingPlaneGeometry,
    /// Detected planes treated as unbounded
    EstimatedPlane,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaycastAlignment {
    Horizontal,
    Vertical,
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastResult {
    /// Hit pose in world space; its Y axis is the surface normal
    pub world_transform: Mat4,
    pub distance: f32,
    /// Index of the detected plane that was hit
    pub plane: usize,
}

/// Surface hit testing from a screen point into detected real-world geometry
pub trait SurfaceQuery {
    /// Results ordered nearest first. Empty when nothing is hit.
    fn raycast(
        &self,
        screen_point: Vec2,
        target: RaycastTarget,
        alignment: RaycastAlignment,
    ) -> Vec<RaycastResult>;
}
