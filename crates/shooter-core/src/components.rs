//! ECS components for hecs entities.
//!
//! Components are plain data. Game logic lives in systems.
//! `Position`, `Velocity` and `Orientation` live in `types.rs` and double
//! as components.

use serde::{Deserialize, Serialize};

/// Marks an entity as an enemy. Enemies carry `Position` + `Orientation`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Marks an entity as a player projectile (fireball).
/// Projectiles carry `Position` + `Velocity`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile;
