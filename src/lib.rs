pub mod app;
pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod frame;
pub mod library;
pub mod math;
pub mod scene;
pub mod session;
pub mod traits;

pub use app::{PlacementApp, World};
pub use config::Config;
pub use crate::core::{CursorTracker, SizeClass, Spawner, TapTarget};
