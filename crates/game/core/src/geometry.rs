//! Axis-aligned boxes and the swept-box test behind obstruction queries.
use glam::Vec3;

/// Axis-aligned bounding box stored as center plus half-extent.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    pub center: Vec3,
    pub half_extent: Vec3,
}

impl Aabb {
    pub const fn new(center: Vec3, half_extent: Vec3) -> Self {
        Self {
            center,
            half_extent,
        }
    }

    /// Box with the same half-extent on every axis.
    pub fn cube(center: Vec3, half_extent: f32) -> Self {
        Self::new(center, Vec3::splat(half_extent))
    }

    pub fn min(&self) -> Vec3 {
        self.center - self.half_extent
    }

    pub fn max(&self) -> Vec3 {
        self.center + self.half_extent
    }

    /// Minkowski sum with a box of the given half-extent.
    pub fn expanded(&self, by: Vec3) -> Self {
        Self::new(self.center, self.half_extent + by)
    }

    /// Strict overlap: boxes that only share a face do not intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        let gap = (self.center - other.center).abs();
        let reach = self.half_extent + other.half_extent;
        gap.x < reach.x && gap.y < reach.y && gap.z < reach.z
    }

    /// Strict overlap with a sphere, measured from the closest point on the box.
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        let closest = center.clamp(self.min(), self.max());
        closest.distance_squared(center) < radius * radius
    }

    /// Time of first contact in `[0, 1]` when a box of `half_extent` travels
    /// from `from` to `to`, or `None` when it never enters this box.
    ///
    /// Starting inside counts as contact at `t = 0`. Grazing a face or ending
    /// flush against one is not contact.
    pub fn sweep(&self, half_extent: Vec3, from: Vec3, to: Vec3) -> Option<f32> {
        let expanded = self.expanded(half_extent);
        let lo = expanded.min().to_array();
        let hi = expanded.max().to_array();
        let origin = from.to_array();
        let delta = (to - from).to_array();

        let mut t_enter = 0.0_f32;
        let mut t_exit = 1.0_f32;
        for axis in 0..3 {
            if delta[axis] == 0.0 {
                if origin[axis] <= lo[axis] || origin[axis] >= hi[axis] {
                    return None;
                }
                continue;
            }
            let inv = 1.0 / delta[axis];
            let mut t0 = (lo[axis] - origin[axis]) * inv;
            let mut t1 = (hi[axis] - origin[axis]) * inv;
            if t0 > t1 {
                core::mem::swap(&mut t0, &mut t1);
            }
            t_enter = t_enter.max(t0);
            t_exit = t_exit.min(t1);
            if t_enter >= t_exit {
                return None;
            }
        }
        Some(t_enter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall(x: f32, y: f32) -> Aabb {
        Aabb::cube(Vec3::new(x, y, 50.0), 50.0)
    }

    #[test]
    fn sweep_into_wall_ahead_hits() {
        let from = Vec3::new(100.0, 100.0, 50.0);
        let to = Vec3::new(200.0, 100.0, 50.0);
        let hit = wall(200.0, 100.0).sweep(Vec3::splat(40.0), from, to);
        let t = hit.expect("wall ahead must block");
        assert!((t - 0.1).abs() < 1e-5, "contact at x=110, got t={t}");
    }

    #[test]
    fn sweep_past_neighbouring_wall_is_clear() {
        let from = Vec3::new(100.0, 100.0, 50.0);
        let to = Vec3::new(200.0, 100.0, 50.0);
        assert_eq!(wall(200.0, 200.0).sweep(Vec3::splat(40.0), from, to), None);
        assert_eq!(wall(100.0, 0.0).sweep(Vec3::splat(40.0), from, to), None);
    }

    #[test]
    fn sweep_ending_flush_is_clear() {
        let from = Vec3::new(0.0, 0.0, 0.0);
        let to = Vec3::new(10.0, 0.0, 0.0);
        let target = Aabb::cube(Vec3::new(20.0, 0.0, 0.0), 5.0);
        assert_eq!(target.sweep(Vec3::splat(5.0), from, to), None);
    }

    #[test]
    fn sweep_starting_inside_hits_immediately() {
        let inside = Vec3::new(200.0, 100.0, 50.0);
        let hit = wall(200.0, 100.0).sweep(Vec3::splat(40.0), inside, inside);
        assert_eq!(hit, Some(0.0));
    }

    #[test]
    fn sweep_backwards_away_from_wall_is_clear() {
        let from = Vec3::new(100.0, 100.0, 50.0);
        let to = Vec3::new(0.0, 100.0, 50.0);
        assert_eq!(wall(200.0, 100.0).sweep(Vec3::splat(40.0), from, to), None);
    }

    #[test]
    fn boxes_sharing_a_face_do_not_intersect() {
        let a = Aabb::cube(Vec3::ZERO, 50.0);
        let b = Aabb::cube(Vec3::new(100.0, 0.0, 0.0), 50.0);
        let c = Aabb::cube(Vec3::new(99.0, 0.0, 0.0), 50.0);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&c));
    }

    #[test]
    fn sphere_overlap_uses_closest_point() {
        let agent = Aabb::cube(Vec3::ZERO, 40.0);
        assert!(agent.intersects_sphere(Vec3::new(60.0, 0.0, 0.0), 30.0));
        assert!(!agent.intersects_sphere(Vec3::new(70.0, 0.0, 0.0), 30.0));
        assert!(!agent.intersects_sphere(Vec3::new(65.0, 65.0, 0.0), 30.0));
    }
}
