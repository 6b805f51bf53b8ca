//! Simulation constants and tuning parameters.

/// Nominal frame rate of the demo loop (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at the nominal frame rate.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Collision ---

/// Collision sphere radius shared by every enemy.
pub const ENEMY_COLLISION_RADIUS: f32 = 0.5;

/// Collision sphere radius of a fireball.
pub const PROJECTILE_COLLISION_RADIUS: f32 = 0.2;

/// Projectiles farther than this from the camera are despawned.
pub const PROJECTILE_MAX_RANGE: f32 = 50.0;

// --- Enemy spawning ---

/// One enemy spawn attempt every N ticks.
pub const ENEMY_SPAWN_INTERVAL_TICKS: u64 = 100;

/// Spawn attempts are skipped while this many enemies are alive.
pub const MAX_LIVE_ENEMIES: usize = 20;

/// Closest an enemy may spawn to the camera.
pub const MIN_SPAWN_DISTANCE: f32 = 5.0;

/// Farthest an enemy may spawn from the camera.
pub const MAX_SPAWN_DISTANCE: f32 = 15.0;

/// Per-component bound of the random rotation axis (before normalization).
pub const SPAWN_AXIS_BOUND: f32 = 25.0;

// --- Firing ---

/// Minimum time between two successful shots (seconds).
pub const FIRE_COOLDOWN_SECS: f64 = 0.3;

/// Fireball speed along the camera's forward direction (units per tick).
pub const PROJECTILE_SPEED: f32 = 0.03;

// --- Camera ---

/// Initial horizontal look angle (radians). PI looks down -Z.
pub const CAMERA_INITIAL_HORIZONTAL_ANGLE: f32 = std::f32::consts::PI;

/// Walk speed (units per second).
pub const CAMERA_MOVE_SPEED: f32 = 3.0;

/// Mouse look sensitivity (radians per pixel).
pub const CAMERA_MOUSE_SPEED: f32 = 0.003;

/// Vertical field of view (degrees).
pub const CAMERA_FOV_DEGREES: f32 = 45.0;

/// Viewport aspect ratio.
pub const CAMERA_ASPECT: f32 = 4.0 / 3.0;

/// Near clip plane.
pub const CAMERA_NEAR: f32 = 0.1;

/// Far clip plane.
pub const CAMERA_FAR: f32 = 100.0;

// --- Persistence ---

/// Scene file used when no explicit path is given.
pub const DEFAULT_SCENE_FILE: &str = "scene.txt";
