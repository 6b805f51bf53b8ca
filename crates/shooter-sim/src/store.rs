//! Entity store: the live enemies and projectiles.
//!
//! Backed by a hecs `World`. Handles are generational `hecs::Entity` ids, so a
//! removed entity's handle never aliases a later one. Category membership is
//! the `Enemy` / `Projectile` marker component.

use hecs::{Entity, World};

use shooter_core::components::{Enemy, Projectile};
use shooter_core::types::{EnemyRecord, Orientation, Position, ProjectileRecord, Velocity};

#[derive(Default)]
pub struct EntityStore {
    world: World,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_enemy(&mut self, enemy: EnemyRecord) -> Entity {
        self.world.spawn((
            Enemy,
            Position(enemy.position),
            Orientation(enemy.orientation),
        ))
    }

    pub fn add_projectile(&mut self, projectile: ProjectileRecord) -> Entity {
        self.world.spawn((
            Projectile,
            Position(projectile.position),
            Velocity(projectile.velocity),
        ))
    }

    /// Remove an entity. Returns false if the handle was already gone.
    pub fn remove(&mut self, entity: Entity) -> bool {
        self.world.despawn(entity).is_ok()
    }

    /// Drop every enemy and projectile.
    pub fn clear(&mut self) {
        self.world.clear();
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.world.contains(entity)
    }

    /// Handles of all live enemies, copied so the caller may mutate the store
    /// while walking them.
    pub fn enemies(&self) -> Vec<Entity> {
        self.world
            .query::<&Enemy>()
            .iter()
            .map(|(entity, _)| entity)
            .collect()
    }

    /// Handles of all live projectiles.
    pub fn projectiles(&self) -> Vec<Entity> {
        self.world
            .query::<&Projectile>()
            .iter()
            .map(|(entity, _)| entity)
            .collect()
    }

    pub fn enemy_count(&self) -> usize {
        self.world.query::<&Enemy>().iter().count()
    }

    pub fn projectile_count(&self) -> usize {
        self.world.query::<&Projectile>().iter().count()
    }

    pub fn enemy(&self, entity: Entity) -> Option<EnemyRecord> {
        self.world.get::<&Enemy>(entity).ok()?;
        let position = self.world.get::<&Position>(entity).ok()?;
        let orientation = self.world.get::<&Orientation>(entity).ok()?;
        Some(EnemyRecord::new(position.0, orientation.0))
    }

    pub fn projectile(&self, entity: Entity) -> Option<ProjectileRecord> {
        self.world.get::<&Projectile>(entity).ok()?;
        let position = self.world.get::<&Position>(entity).ok()?;
        let velocity = self.world.get::<&Velocity>(entity).ok()?;
        Some(ProjectileRecord::new(position.0, velocity.0))
    }

    pub fn enemy_records(&self) -> Vec<EnemyRecord> {
        self.world
            .query::<(&Enemy, &Position, &Orientation)>()
            .iter()
            .map(|(_, (_, pos, rot))| EnemyRecord::new(pos.0, rot.0))
            .collect()
    }

    pub fn projectile_records(&self) -> Vec<ProjectileRecord> {
        self.world
            .query::<(&Projectile, &Position, &Velocity)>()
            .iter()
            .map(|(_, (_, pos, vel))| ProjectileRecord::new(pos.0, vel.0))
            .collect()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Quat, Vec3};

    fn enemy_at(x: f32) -> EnemyRecord {
        EnemyRecord::new(Vec3::new(x, 0.0, 0.0), Quat::IDENTITY)
    }

    #[test]
    fn add_and_remove() {
        let mut store = EntityStore::new();
        let e = store.add_enemy(enemy_at(1.0));
        let p = store.add_projectile(ProjectileRecord::new(Vec3::ZERO, Vec3::Z));
        assert_eq!(store.enemy_count(), 1);
        assert_eq!(store.projectile_count(), 1);

        assert!(store.remove(e));
        assert!(!store.contains(e));
        assert_eq!(store.enemy_count(), 0);
        assert_eq!(store.projectile_count(), 1);
        assert!(store.contains(p));
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut store = EntityStore::new();
        let e = store.add_enemy(enemy_at(1.0));
        assert!(store.remove(e));
        assert!(!store.remove(e));
        assert_eq!(store.enemy_count(), 0);
    }

    #[test]
    fn identical_values_are_distinct_entities() {
        let mut store = EntityStore::new();
        let a = store.add_enemy(enemy_at(2.0));
        let b = store.add_enemy(enemy_at(2.0));
        assert_ne!(a, b);
        assert_eq!(store.enemy_count(), 2);

        store.remove(a);
        assert_eq!(store.enemies(), vec![b]);
    }

    #[test]
    fn stale_handle_does_not_alias_new_entity() {
        let mut store = EntityStore::new();
        let old = store.add_enemy(enemy_at(1.0));
        store.remove(old);
        let new = store.add_enemy(enemy_at(3.0));
        assert!(!store.contains(old));
        assert!(!store.remove(old));
        assert!(store.contains(new));
    }

    #[test]
    fn categories_are_separate() {
        let mut store = EntityStore::new();
        let e = store.add_enemy(enemy_at(1.0));
        let p = store.add_projectile(ProjectileRecord::new(Vec3::ONE, Vec3::X));
        assert_eq!(store.enemies(), vec![e]);
        assert_eq!(store.projectiles(), vec![p]);
        assert!(store.enemy(p).is_none());
        assert!(store.projectile(e).is_none());
        assert_eq!(store.projectile(p).unwrap().velocity, Vec3::X);
    }

    #[test]
    fn clear_empties_both_categories() {
        let mut store = EntityStore::new();
        for i in 0..5 {
            store.add_enemy(enemy_at(i as f32));
            store.add_projectile(ProjectileRecord::new(Vec3::ZERO, Vec3::Y));
        }
        store.clear();
        assert_eq!(store.enemy_count(), 0);
        assert_eq!(store.projectile_count(), 0);
        assert!(store.enemies().is_empty());
    }

    #[test]
    fn handle_list_survives_removal_during_iteration() {
        let mut store = EntityStore::new();
        for i in 0..4 {
            store.add_enemy(enemy_at(i as f32));
        }
        for entity in store.enemies() {
            store.remove(entity);
        }
        assert_eq!(store.enemy_count(), 0);
    }
}
