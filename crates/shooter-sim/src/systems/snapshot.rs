//! Snapshot system: queries the world and builds the renderer's `FrameSnapshot`.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use shooter_core::commands::FrameInput;
use shooter_core::components::{Enemy, Projectile};
use shooter_core::state::{EnemyView, FrameSnapshot, ProjectileView};
use shooter_core::types::{Orientation, Position, SimTime};

/// Build the drawable state for this frame. Events are attached by the engine
/// once the tick is complete.
pub fn build_snapshot(world: &World, time: &SimTime, input: &FrameInput, score: u32) -> FrameSnapshot {
    FrameSnapshot {
        time: *time,
        camera: input.camera,
        view_projection: input.view_projection,
        enemies: build_enemies(world),
        projectiles: build_projectiles(world),
        score,
        events: Vec::new(),
    }
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    world
        .query::<(&Enemy, &Position, &Orientation)>()
        .iter()
        .map(|(_, (_, pos, rot))| EnemyView {
            position: pos.0,
            orientation: rot.0,
        })
        .collect()
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Projectile, &Position)>()
        .iter()
        .map(|(_, (_, pos))| ProjectileView { position: pos.0 })
        .collect()
}
