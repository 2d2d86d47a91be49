//! Seams to the tracking and rendering engine. The core only talks to the
//! world through these.

pub mod library;
pub mod pick;
pub mod scene;
pub mod surface;

pub use library::*;
pub use pick::*;
pub use scene::*;
pub use surface::*;
