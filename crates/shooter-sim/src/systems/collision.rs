//! Collision detection: projectile/enemy sphere hits and out-of-range projectiles.
//!
//! Detection is read-only: it builds a `RemovalSet` and never touches the
//! world. `cleanup::run` applies it afterwards, so an enemy struck by two
//! fireballs in the same tick is still removed exactly once.
//!
//! The scan is exhaustive (every projectile against every enemy). Live counts
//! stay in the tens; a grid or BVH broad phase would slot in front of
//! `spheres_overlap` without changing the predicate.

use std::collections::BTreeSet;

use glam::Vec3;
use hecs::{Entity, World};

use shooter_core::components::{Enemy, Projectile};
use shooter_core::constants::{ENEMY_COLLISION_RADIUS, PROJECTILE_COLLISION_RADIUS};
use shooter_core::types::Position;

/// Entities scheduled for removal at the end of a tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovalSet {
    pub enemies: BTreeSet<Entity>,
    /// Every projectile to remove, whether it hit something or flew out of range.
    pub projectiles: BTreeSet<Entity>,
    /// Subset of `projectiles` that left the range without hitting anything.
    pub expired: BTreeSet<Entity>,
}

impl RemovalSet {
    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty() && self.projectiles.is_empty()
    }
}

/// Strict sphere overlap: touching spheres do not collide.
pub fn spheres_overlap(a: Vec3, radius_a: f32, b: Vec3, radius_b: f32) -> bool {
    a.distance(b) < radius_a + radius_b
}

/// Find every projectile/enemy hit and every projectile beyond `max_range`
/// of the camera.
pub fn detect(world: &World, camera_position: Vec3, max_range: f32) -> RemovalSet {
    let enemies: Vec<(Entity, Vec3)> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .map(|(entity, (_, pos))| (entity, pos.0))
        .collect();

    let mut removal = RemovalSet::default();

    for (projectile, (_, pos)) in world.query::<(&Projectile, &Position)>().iter() {
        let mut hit = false;
        for &(enemy, enemy_pos) in &enemies {
            if spheres_overlap(
                pos.0,
                PROJECTILE_COLLISION_RADIUS,
                enemy_pos,
                ENEMY_COLLISION_RADIUS,
            ) {
                removal.enemies.insert(enemy);
                hit = true;
            }
        }

        if hit {
            removal.projectiles.insert(projectile);
        } else if pos.0.distance(camera_position) > max_range {
            removal.projectiles.insert(projectile);
            removal.expired.insert(projectile);
        }
    }

    removal
}
