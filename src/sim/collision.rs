//! Axis-aligned collision test between the two vehicles
//!
//! Discrete per-tick box overlap only. At the shipped forward speed and
//! pursuit gain the relative velocity is far below the box sizes, so
//! tunneling cannot occur; a swept test is deliberately out of scope.

use glam::Vec3;

use crate::tuning::Tuning;

/// Axis-aligned bounding box, stored as center plus half extents
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub center: Vec3,
    pub half: Vec3,
}

impl Aabb {
    pub fn new(center: Vec3, half: Vec3) -> Self {
        Self { center, half }
    }

    /// Overlap test: boxes intersect when the center distance is within the
    /// summed half extents on every axis
    pub fn intersects(&self, other: &Aabb) -> bool {
        let d = (self.center - other.center).abs();
        let reach = self.half + other.half;
        d.x <= reach.x && d.y <= reach.y && d.z <= reach.z
    }
}

/// Box overlap between player and pursuer at their current positions.
/// The stand-in model shares these half extents, so collision behaves the
/// same whether or not the real vehicle model ever loaded.
pub fn vehicles_collide(player_pos: Vec3, pursuer_pos: Vec3, tuning: &Tuning) -> bool {
    let player = Aabb::new(player_pos, tuning.player_half_extents);
    let pursuer = Aabb::new(pursuer_pos, tuning.pursuer_half_extents);
    player.intersects(&pursuer)
}
