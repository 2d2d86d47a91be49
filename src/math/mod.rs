mod aabb;
mod ray;
mod transform;

pub use aabb::Aabb;
pub use ray::{intersect_aabb, intersect_plane, Ray};
pub use transform::Transform;
