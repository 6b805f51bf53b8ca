//! Fundamental geometric and simulation types.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// 3D position in world space (scene units, OpenGL convention: y up, -z forward).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec3);

/// Per-tick displacement. Added to `Position` once per tick, no acceleration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec3);

/// Rotation of an entity, stored as a unit quaternion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orientation(pub Quat);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds (sum of frame deltas).
    pub elapsed_secs: f64,
}

/// Plain record of an enemy, used for spawning, scene files and tests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyRecord {
    pub position: Vec3,
    pub orientation: Quat,
}

/// Plain record of a projectile (fireball).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileRecord {
    pub position: Vec3,
    pub velocity: Vec3,
}

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f32 {
        self.0.distance(other.0)
    }
}

impl Velocity {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }
}

impl Orientation {
    /// Build a rotation from an axis and an angle in degrees.
    ///
    /// Uses the half-angle encoding `(axis * sin(a/2), cos(a/2))` with the axis
    /// taken as given; pass a normalized axis to get a unit quaternion.
    pub fn from_axis_degrees(axis: Vec3, degrees: f32) -> Self {
        let half = degrees.to_radians() / 2.0;
        let (sin, cos) = half.sin_cos();
        Self(Quat::from_xyzw(axis.x * sin, axis.y * sin, axis.z * sin, cos))
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self(Quat::IDENTITY)
    }
}

impl SimTime {
    /// Advance by one tick covering `dt_secs` of wall time.
    pub fn advance(&mut self, dt_secs: f64) {
        self.tick += 1;
        self.elapsed_secs += dt_secs;
    }
}

impl EnemyRecord {
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }
}

impl ProjectileRecord {
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self { position, velocity }
    }
}
