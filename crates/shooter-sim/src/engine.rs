//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the entity store, the seeded RNG and the score,
//! processes scene commands and runs the systems in a fixed order each tick.
//! It is completely headless, so whole sessions can be tested
//! deterministically.

use std::collections::VecDeque;
use std::path::Path;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use shooter_core::commands::{FrameInput, PlayerCommand};
use shooter_core::constants::PROJECTILE_MAX_RANGE;
use shooter_core::events::SimEvent;
use shooter_core::state::FrameSnapshot;
use shooter_core::types::SimTime;

use crate::scene::{self, Scene, SceneError};
use crate::store::EntityStore;
use crate::systems;
use crate::systems::fire_control::FireControl;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and inputs = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the entity store and all sim state.
pub struct SimulationEngine {
    store: EntityStore,
    time: SimTime,
    rng: ChaCha8Rng,
    fire_control: FireControl,
    score: u32,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    pub fn new(config: SimConfig) -> Self {
        Self {
            store: EntityStore::new(),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            fire_control: FireControl::new(),
            score: 0,
            command_queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick.
    ///
    /// The returned snapshot holds the entities as they stood after motion
    /// and before collision removal (what the renderer draws this frame).
    /// Its score and events cover the whole tick.
    pub fn tick(&mut self, input: &FrameInput) -> FrameSnapshot {
        self.process_commands();

        // 1. Camera pose for this frame
        let camera = input.camera;

        // 2. Fire control
        if let Some(projectile) = self.fire_control.maybe_spawn_projectile(
            input.fire,
            self.time.elapsed_secs,
            camera.position,
            camera.forward,
        ) {
            self.store.add_projectile(projectile);
            self.events.push(SimEvent::ProjectileFired {
                position: projectile.position,
                velocity: projectile.velocity,
            });
        }

        // 3. Motion integration
        systems::movement::run(self.store.world_mut());

        // 4. Render handoff
        let mut snapshot =
            systems::snapshot::build_snapshot(self.store.world(), &self.time, input, self.score);

        // 5. Collision detection, then removal
        let removal =
            systems::collision::detect(self.store.world(), camera.position, PROJECTILE_MAX_RANGE);
        if !removal.is_empty() {
            let summary = systems::cleanup::run(self.store.world_mut(), &removal, &mut self.events);
            self.score += summary.enemies_destroyed;
        }

        // 6. Clock
        self.time.advance(input.dt_secs);

        // 7. Periodic enemy spawn
        if let Some(enemy) = systems::enemy_spawner::maybe_spawn_enemy(
            self.time.tick,
            camera.position,
            self.store.enemy_count(),
            &mut self.rng,
        ) {
            self.store.add_enemy(enemy);
            debug!(tick = self.time.tick, position = ?enemy.position, "enemy spawned");
            self.events.push(SimEvent::EnemySpawned {
                position: enemy.position,
            });
        }

        snapshot.score = self.score;
        snapshot.events = std::mem::take(&mut self.events);
        snapshot
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Enemies destroyed so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Mutable store access for tests that stage exact scenarios.
    #[cfg(test)]
    pub fn store_mut(&mut self) -> &mut EntityStore {
        &mut self.store
    }

    /// Current live entities and score as a scene.
    pub fn scene(&self) -> Scene {
        Scene {
            projectiles: self.store.projectile_records(),
            enemies: self.store.enemy_records(),
            score: self.score,
        }
    }

    /// Replace every live entity and the score with `scene`.
    pub fn restore_scene(&mut self, scene: Scene) {
        self.store.clear();
        for projectile in scene.projectiles {
            self.store.add_projectile(projectile);
        }
        for enemy in scene.enemies {
            self.store.add_enemy(enemy);
        }
        self.score = scene.score;
    }

    /// Write the current scene to `path`.
    pub fn save_scene(&mut self, path: &Path) -> Result<(), SceneError> {
        scene::save_to_file(path, &self.scene())?;
        debug!(
            path = %path.display(),
            enemies = self.store.enemy_count(),
            projectiles = self.store.projectile_count(),
            "scene saved"
        );
        self.events.push(SimEvent::SceneSaved {
            path: path.display().to_string(),
        });
        Ok(())
    }

    /// Replace the live scene with the contents of `path`.
    ///
    /// Fails softly: if the file cannot be opened or parsed, the current
    /// entities and score are kept and `false` is returned.
    pub fn load_scene(&mut self, path: &Path) -> bool {
        let loaded = match scene::load_from_file(path) {
            Ok(loaded) => loaded,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "scene load failed, keeping current scene");
                self.events.push(SimEvent::SceneLoadFailed {
                    path: path.display().to_string(),
                });
                return false;
            }
        };

        let enemies = loaded.enemies.len();
        let projectiles = loaded.projectiles.len();
        self.restore_scene(loaded);
        debug!(path = %path.display(), enemies, projectiles, score = self.score, "scene loaded");
        self.events.push(SimEvent::SceneLoaded {
            path: path.display().to_string(),
            enemies,
            projectiles,
        });
        true
    }

    /// Drop every live entity. The score is kept.
    pub fn clear_scene(&mut self) {
        self.store.clear();
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SaveScene { path } => {
                if let Err(err) = self.save_scene(Path::new(&path)) {
                    warn!(%path, error = %err, "scene save failed");
                }
            }
            PlayerCommand::LoadScene { path } => {
                self.load_scene(Path::new(&path));
            }
            PlayerCommand::ClearScene => self.clear_scene(),
        }
    }
}
