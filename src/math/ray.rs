use glam::Vec3;

use super::Aabb;

/// Half-line used by both plane raycasts and entity picking
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Direction is normalized so distances are in world units
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Slab test. Returns the distance to the nearest face in front of the origin,
/// or the exit distance when the origin is inside the box.
pub fn intersect_aabb(ray: &Ray, aabb: &Aabb) -> Option<f32> {
    const EPSILON: f32 = 1e-8;

    // Near-zero components are clamped so the slab for that axis spans everything
    let inv = |d: f32| {
        if d.abs() < EPSILON {
            1.0 / EPSILON.copysign(d)
        } else {
            1.0 / d
        }
    };
    let inv_dir = Vec3::new(inv(ray.direction.x), inv(ray.direction.y), inv(ray.direction.z));

    let t_min = (aabb.min - ray.origin) * inv_dir;
    let t_max = (aabb.max - ray.origin) * inv_dir;

    let t1 = t_min.min(t_max);
    let t2 = t_min.max(t_max);

    let t_near = t1.max_element();
    let t_far = t2.min_element();

    if t_near > t_far || t_far < 0.0 {
        return None;
    }

    if t_near < 0.0 {
        (t_far > 0.001).then_some(t_far)
    } else {
        Some(t_near)
    }
}

/// Ray against an infinite plane through `point` with normal `normal`
pub fn intersect_plane(ray: &Ray, point: Vec3, normal: Vec3) -> Option<f32> {
    const EPSILON: f32 = 1e-6;

    let denom = normal.dot(ray.direction);
    if denom.abs() < EPSILON {
        return None;
    }

    let t = (point - ray.origin).dot(normal) / denom;
    (t >= 0.0).then_some(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersect_aabb_hit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let aabb = Aabb::new(Vec3::new(5.0, -1.0, -1.0), Vec3::new(10.0, 1.0, 1.0));
        let t = intersect_aabb(&ray, &aabb).unwrap();
        assert!((t - 5.0).abs() < 0.01);
    }

    #[test]
    fn test_intersect_aabb_miss() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let aabb = Aabb::new(Vec3::new(5.0, 2.0, 2.0), Vec3::new(10.0, 3.0, 3.0));
        assert!(intersect_aabb(&ray, &aabb).is_none());
    }

    #[test]
    fn test_intersect_aabb_behind() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let aabb = Aabb::new(Vec3::new(-10.0, -1.0, -1.0), Vec3::new(-5.0, 1.0, 1.0));
        assert!(intersect_aabb(&ray, &aabb).is_none());
    }

    #[test]
    fn test_intersect_aabb_inside() {
        let ray = Ray::new(Vec3::new(5.0, 0.0, 0.0), Vec3::X);
        let aabb = Aabb::new(Vec3::new(0.0, -1.0, -1.0), Vec3::new(10.0, 1.0, 1.0));
        let t = intersect_aabb(&ray, &aabb).unwrap();
        assert!((t - 5.0).abs() < 0.01);
    }

    #[test]
    fn test_intersect_plane_floor() {
        let ray = Ray::new(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let t = intersect_plane(&ray, Vec3::ZERO, Vec3::Y).unwrap();
        assert!((t - 2.0).abs() < 1e-5);
        assert!(ray.at(t).abs_diff_eq(Vec3::ZERO, 1e-5));
    }

    #[test]
    fn test_intersect_plane_parallel() {
        let ray = Ray::new(Vec3::new(0.0, 2.0, 0.0), Vec3::X);
        assert!(intersect_plane(&ray, Vec3::ZERO, Vec3::Y).is_none());
    }

    #[test]
    fn test_intersect_plane_behind() {
        let ray = Ray::new(Vec3::new(0.0, 2.0, 0.0), Vec3::Y);
        assert!(intersect_plane(&ray, Vec3::ZERO, Vec3::Y).is_none());
    }

    #[test]
    fn test_ray_direction_normalized() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -4.0));
        assert_eq!(ray.direction, Vec3::new(0.0, 0.0, -1.0));
    }
}
