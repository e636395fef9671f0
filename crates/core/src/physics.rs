//! Spatial containment and contact tests.
//!
//! Simple ground-plane geometry - no physics engine needed here. Heights
//! come from the terrain field and are applied by callers after clamping.

use glam::Vec3;

/// Axis-aligned containment rectangle on the ground plane.
///
/// Entities never leave this region; positions are hard-clamped each tick
/// rather than rejected, which produces the "air wall" feel at the edges.
#[derive(Debug, Clone, Copy)]
pub struct WorldBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl WorldBounds {
    pub const fn new(min_x: f32, max_x: f32, min_z: f32, max_z: f32) -> Self {
        Self {
            min_x,
            max_x,
            min_z,
            max_z,
        }
    }

    /// Square bounds centered on the origin.
    pub const fn centered(half_extent: f32) -> Self {
        Self::new(-half_extent, half_extent, -half_extent, half_extent)
    }

    /// Clamp x and z independently; y is untouched. Returns the clamped
    /// position and whether any clamping happened.
    pub fn clamp(&self, position: Vec3) -> (Vec3, bool) {
        let clamped = Vec3::new(
            position.x.clamp(self.min_x, self.max_x),
            position.y,
            position.z.clamp(self.min_z, self.max_z),
        );
        (clamped, clamped != position)
    }

    /// Check if a point is within bounds on the ground plane.
    pub fn contains(&self, position: Vec3) -> bool {
        position.x >= self.min_x
            && position.x <= self.max_x
            && position.z >= self.min_z
            && position.z <= self.max_z
    }
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self::centered(50.0)
    }
}

/// Contact test against a single threshold distance.
#[inline]
pub fn within_range(a: Vec3, b: Vec3, range: f32) -> bool {
    a.distance_squared(b) < range * range
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_inside_is_identity() {
        let bounds = WorldBounds::centered(50.0);
        let p = Vec3::new(10.0, 3.0, -20.0);
        let (clamped, was_clamped) = bounds.clamp(p);
        assert_eq!(clamped, p);
        assert!(!was_clamped);
    }

    #[test]
    fn clamp_outside_pulls_to_edge() {
        let bounds = WorldBounds::centered(50.0);
        let (clamped, was_clamped) = bounds.clamp(Vec3::new(75.0, 1.0, -80.0));
        assert_eq!(clamped, Vec3::new(50.0, 1.0, -50.0));
        assert!(was_clamped);
    }

    #[test]
    fn clamp_is_idempotent() {
        let bounds = WorldBounds::centered(50.0);
        let points = [
            Vec3::new(999.0, 0.0, -999.0),
            Vec3::new(-50.0, 0.0, 50.0),
            Vec3::new(0.1, 7.0, 0.2),
        ];
        for p in points {
            let (once, _) = bounds.clamp(p);
            let (twice, again) = bounds.clamp(once);
            assert_eq!(once, twice);
            assert!(!again);
        }
    }

    #[test]
    fn clamp_leaves_y_alone() {
        let bounds = WorldBounds::centered(50.0);
        let (clamped, _) = bounds.clamp(Vec3::new(100.0, 42.0, 0.0));
        assert_eq!(clamped.y, 42.0);
    }

    #[test]
    fn corner_clamps_both_axes() {
        let bounds = WorldBounds::centered(50.0);
        let (clamped, was_clamped) = bounds.clamp(Vec3::new(60.0, 0.0, 60.0));
        assert_eq!(clamped, Vec3::new(50.0, 0.0, 50.0));
        assert!(was_clamped);
    }

    #[test]
    fn range_test() {
        assert!(within_range(Vec3::ZERO, Vec3::new(0.9, 0.0, 0.0), 1.0));
        assert!(!within_range(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), 1.0));
        assert!(!within_range(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), 1.0));
    }
}
