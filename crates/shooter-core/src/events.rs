//! Events emitted by the simulation for UI and audio feedback.

use glam::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A new enemy appeared.
    EnemySpawned { position: Vec3 },
    /// A fireball left the camera.
    ProjectileFired { position: Vec3, velocity: Vec3 },
    /// An enemy was destroyed by a fireball.
    EnemyDestroyed { position: Vec3 },
    /// A fireball flew past the maximum range.
    ProjectileExpired { position: Vec3 },
    SceneSaved { path: String },
    SceneLoaded {
        path: String,
        enemies: usize,
        projectiles: usize,
    },
    /// A load was requested but the file could not be used.
    SceneLoadFailed { path: String },
}
