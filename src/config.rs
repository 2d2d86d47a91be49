use std::path::Path;

use anyhow::{Context, Result};
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::camera::{Camera, Viewport};
use crate::core::{HiddenCursorPolicy, SpawnerSettings};
use crate::error::ConfigError;
use crate::library::TemplateSpec;
use crate::session::{DetectedPlane, PlaneAlignment};

/// Bounds and starting value of the scale control
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleRange {
    pub min: f32,
    pub max: f32,
    pub initial: f32,
}

impl Default for ScaleRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 2.0,
            initial: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    pub position: Vec3,
    pub yaw_degrees: f32,
    pub pitch_degrees: f32,
    pub fov_degrees: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        let camera = Camera::default();
        Self {
            position: camera.position,
            yaw_degrees: camera.yaw.to_degrees(),
            pitch_degrees: camera.pitch.to_degrees(),
            fov_degrees: camera.fov_y.to_degrees(),
        }
    }
}

impl CameraConfig {
    pub fn to_camera(&self) -> Camera {
        Camera::new(
            self.position,
            self.yaw_degrees.to_radians(),
            self.pitch_degrees.to_radians(),
            self.fov_degrees.to_radians(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneConfig {
    pub center: Vec3,
    pub normal: Vec3,
    pub half_extents: Vec2,
}

impl PlaneConfig {
    pub fn to_plane(&self) -> DetectedPlane {
        DetectedPlane::new(self.center, self.normal, self.half_extents)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name of the template cloned on every spawn
    pub template_name: String,
    pub instance_prefix: String,
    pub display_name: String,
    pub scale: ScaleRange,
    pub hidden_cursor: HiddenCursorPolicy,
    pub plane_detection: Vec<PlaneAlignment>,
    pub viewport: Viewport,
    pub camera: CameraConfig,
    /// Surfaces the simulated session reports
    pub planes: Vec<PlaneConfig>,
    pub templates: Vec<TemplateSpec>,
}

impl Default for Config {
    fn default() -> Self {
        let settings = SpawnerSettings::default();
        Self {
            template_name: "White Bird".to_string(),
            instance_prefix: settings.prefix,
            display_name: settings.display_name,
            scale: ScaleRange::default(),
            hidden_cursor: settings.hidden_cursor,
            plane_detection: vec![PlaneAlignment::Horizontal, PlaneAlignment::Vertical],
            viewport: Viewport::new(390, 844),
            camera: CameraConfig::default(),
            planes: vec![
                // Floor in front of the device and a wall behind it
                PlaneConfig {
                    center: Vec3::new(0.0, 0.0, -1.5),
                    normal: Vec3::Y,
                    half_extents: Vec2::new(1.5, 1.5),
                },
                PlaneConfig {
                    center: Vec3::new(0.0, 1.0, -3.5),
                    normal: Vec3::Z,
                    half_extents: Vec2::new(2.0, 1.0),
                },
            ],
            templates: vec![TemplateSpec::white_bird()],
        }
    }
}

impl Config {
    /// Read a JSON config file. Missing keys take their default values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: Config = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.instance_prefix.is_empty() {
            return Err(ConfigError::EmptyPrefix);
        }

        let ScaleRange { min, max, initial } = self.scale;
        let finite = min.is_finite() && max.is_finite() && initial.is_finite();
        if !finite || min < 0.0 || min > max || !(min..=max).contains(&initial) {
            return Err(ConfigError::InvalidScaleRange { min, max, initial });
        }

        if self.plane_detection.is_empty() {
            return Err(ConfigError::NoPlaneDetection);
        }

        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err(ConfigError::EmptyViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for (i, spec) in self.templates.iter().enumerate() {
            if spec.parts.is_empty() {
                return Err(ConfigError::EmptyTemplate(spec.name.clone()));
            }
            if self.templates[..i].iter().any(|other| other.name == spec.name) {
                return Err(ConfigError::DuplicateTemplate(spec.name.clone()));
            }
        }

        if !self.templates.iter().any(|t| t.name == self.template_name) {
            return Err(ConfigError::TemplateNotFound(self.template_name.clone()));
        }

        Ok(())
    }

    pub fn spawner_settings(&self) -> SpawnerSettings {
        SpawnerSettings {
            prefix: self.instance_prefix.clone(),
            display_name: self.display_name.clone(),
            hidden_cursor: self.hidden_cursor,
        }
    }
}
