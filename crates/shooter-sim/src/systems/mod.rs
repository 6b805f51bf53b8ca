//! Systems that operate on the entity world each tick.
//!
//! Systems are free functions over `&World` / `&mut World`. They do not own
//! state; state lives in components or in the engine.

pub mod cleanup;
pub mod collision;
pub mod enemy_spawner;
pub mod fire_control;
pub mod movement;
pub mod snapshot;
