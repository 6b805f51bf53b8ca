//! Enemy spawning: one attempt every `ENEMY_SPAWN_INTERVAL_TICKS`, capped at
//! `MAX_LIVE_ENEMIES`.
//!
//! Enemies appear on a shell around the camera: each offset component has a
//! magnitude in `[MIN_SPAWN_DISTANCE, MAX_SPAWN_DISTANCE] / sqrt(3)` and a random
//! sign, so the offset length stays within `[MIN, MAX]`.

use glam::Vec3;
use rand::Rng;
use tracing::trace;

use shooter_core::constants::*;
use shooter_core::types::{EnemyRecord, Orientation};

/// Spawn an enemy if this tick is a spawn tick and the cap allows it.
pub fn maybe_spawn_enemy<R: Rng>(
    tick: u64,
    camera_position: Vec3,
    live_enemies: usize,
    rng: &mut R,
) -> Option<EnemyRecord> {
    if tick % ENEMY_SPAWN_INTERVAL_TICKS != 0 {
        return None;
    }
    if live_enemies >= MAX_LIVE_ENEMIES {
        trace!(tick, live_enemies, "enemy cap reached, skipping spawn");
        return None;
    }
    Some(random_enemy(camera_position, rng))
}

/// Place one enemy at a random offset from the camera with a random rotation.
pub fn random_enemy<R: Rng>(camera_position: Vec3, rng: &mut R) -> EnemyRecord {
    let axis = Vec3::new(
        rng.gen_range(-SPAWN_AXIS_BOUND..=SPAWN_AXIS_BOUND),
        rng.gen_range(-SPAWN_AXIS_BOUND..=SPAWN_AXIS_BOUND),
        rng.gen_range(-SPAWN_AXIS_BOUND..=SPAWN_AXIS_BOUND),
    )
    .try_normalize()
    .unwrap_or(Vec3::Y);

    let offset = Vec3::new(
        shell_component(rng),
        shell_component(rng),
        shell_component(rng),
    );
    let degrees: f32 = rng.gen_range(0.0..360.0);

    EnemyRecord::new(
        camera_position + offset,
        Orientation::from_axis_degrees(axis, degrees).0,
    )
}

fn shell_component<R: Rng>(rng: &mut R) -> f32 {
    let magnitude =
        rng.gen_range(MIN_SPAWN_DISTANCE..=MAX_SPAWN_DISTANCE) / 3f32.sqrt();
    if rng.gen_bool(0.5) {
        magnitude
    } else {
        -magnitude
    }
}
