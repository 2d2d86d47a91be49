use thiserror::Error;

use crate::scene::NodeId;

/// Startup-time configuration problems. These abort initialization.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("template object `{0}` not found in object library")]
    TemplateNotFound(String),

    #[error("instance name prefix must not be empty")]
    EmptyPrefix,

    #[error("scale range is invalid: min {min} max {max} initial {initial}")]
    InvalidScaleRange { min: f32, max: f32, initial: f32 },

    #[error("plane detection must enable at least one alignment")]
    NoPlaneDetection,

    #[error("viewport must have non-zero size, got {width}x{height}")]
    EmptyViewport { width: u32, height: u32 },

    #[error("template `{0}` has no parts")]
    EmptyTemplate(String),

    #[error("template `{0}` is defined more than once")]
    DuplicateTemplate(String),

    #[error("scene setup failed: {0}")]
    Scene(#[from] SceneError),
}

/// Scene graph operations on invalid nodes or invalid hierarchies
#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("unknown node {0:?}")]
    UnknownNode(NodeId),

    #[error("attaching {child:?} under {parent:?} would create a cycle")]
    Cycle { parent: NodeId, child: NodeId },

    #[error("{child:?} is not a child of {parent:?}")]
    NotAChild { parent: NodeId, child: NodeId },
}

#[derive(Debug, Error, PartialEq)]
pub enum SpawnError {
    #[error("cursor is hidden, no surface under the reticle")]
    CursorHidden,

    #[error("scale must be finite and non-negative, got {0}")]
    InvalidScale(f32),

    #[error(transparent)]
    Scene(#[from] SceneError),
}
