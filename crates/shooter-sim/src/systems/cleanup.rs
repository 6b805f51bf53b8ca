//! Cleanup system: applies a tick's `RemovalSet`.

use hecs::World;
use tracing::debug;

use shooter_core::events::SimEvent;
use shooter_core::types::Position;

use super::collision::RemovalSet;

/// What a cleanup pass actually removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemovalSummary {
    pub enemies_destroyed: u32,
    pub projectiles_removed: u32,
}

/// Despawn every scheduled entity. Handles that are already gone are skipped.
pub fn run(world: &mut World, removal: &RemovalSet, events: &mut Vec<SimEvent>) -> RemovalSummary {
    let mut summary = RemovalSummary::default();

    for &entity in &removal.enemies {
        let position = world.get::<&Position>(entity).map(|p| p.0).ok();
        if world.despawn(entity).is_ok() {
            summary.enemies_destroyed += 1;
            if let Some(position) = position {
                debug!(?position, "enemy destroyed");
                events.push(SimEvent::EnemyDestroyed { position });
            }
        }
    }

    for &entity in &removal.projectiles {
        let position = world.get::<&Position>(entity).map(|p| p.0).ok();
        if world.despawn(entity).is_ok() {
            summary.projectiles_removed += 1;
            if removal.expired.contains(&entity) {
                if let Some(position) = position {
                    events.push(SimEvent::ProjectileExpired { position });
                }
            }
        }
    }

    summary
}
