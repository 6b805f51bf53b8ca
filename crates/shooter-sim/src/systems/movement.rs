//! Kinematic integration system.
//!
//! Updates Position from Velocity once per tick: position += velocity.
//! Velocity is already expressed per tick, so there is no dt factor.
//! No collision checks happen here; all positions for the tick are final
//! before the collision pass runs.

use hecs::World;

use shooter_core::components::Projectile;
use shooter_core::types::{Position, Velocity};

/// Advance every projectile by its velocity.
pub fn run(world: &mut World) {
    for (_entity, (_projectile, pos, vel)) in
        world.query_mut::<(&Projectile, &mut Position, &Velocity)>()
    {
        pos.0 += vel.0;
    }
}
