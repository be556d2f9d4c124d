//! Axis-aligned box overlap
//!
//! Entities collide as 2D boxes centered on their position with half-extents
//! of half their x/y scale. The z axis is ignored.

use glam::{Vec2, Vec3};

/// Axis-aligned bounding box in the XY plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    /// Box for an entity-like body: centered at `position`, sized by `scale`
    pub fn from_position_scale(position: Vec3, scale: Vec3) -> Self {
        Self::new(position.truncate(), scale.truncate() / 2.0)
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.half_extents
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.half_extents
    }

    /// Separating-axis test. Touching edges do not count as overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let gap = (self.center - other.center).abs();
        let reach = self.half_extents + other.half_extents;
        gap.x < reach.x && gap.y < reach.y
    }
}
