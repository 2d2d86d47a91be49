use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::math::Ray;

/// Screen area in points, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width as f32 * 0.5, self.height as f32 * 0.5)
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

/// Device camera pose, yaw/pitch in radians
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    /// Vertical field of view in radians
    pub fov_y: f32,
}

impl Camera {
    pub fn new(position: Vec3, yaw: f32, pitch: f32, fov_y: f32) -> Self {
        Self {
            position,
            yaw,
            pitch,
            fov_y,
        }
    }

    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward())
    }

    pub fn rotate(&mut self, yaw_delta: f32, pitch_delta: f32) {
        const PITCH_LIMIT: f32 = 1.5;
        self.yaw += yaw_delta;
        self.pitch = (self.pitch + pitch_delta).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// World-space ray through a screen point
    pub fn ray_through(&self, screen_point: Vec2, viewport: &Viewport) -> Ray {
        let w = viewport.width.max(1) as f32;
        let h = viewport.height.max(1) as f32;
        let ndc_x = 2.0 * screen_point.x / w - 1.0;
        let ndc_y = 1.0 - 2.0 * screen_point.y / h;

        let tan_half = (self.fov_y * 0.5).tan();
        let direction = self.forward()
            + self.right() * ndc_x * tan_half * viewport.aspect()
            + self.up() * ndc_y * tan_half;

        Ray::new(self.position, direction)
    }
}

impl Default for Camera {
    /// Eye height, looking toward -Z and slightly down
    fn default() -> Self {
        Self::new(
            Vec3::new(0.0, 1.5, 0.0),
            std::f32::consts::PI,
            -0.6,
            60f32.to_radians(),
        )
    }
}
