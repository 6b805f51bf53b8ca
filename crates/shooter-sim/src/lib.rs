//! Simulation engine for the fireball shooter.
//!
//! Owns the hecs entity store, runs the per-tick systems in a fixed order,
//! reads/writes scene files and produces `FrameSnapshot`s for the renderer.

pub mod engine;
pub mod scene;
pub mod store;
pub mod systems;

pub use engine::{SimConfig, SimulationEngine};
pub use shooter_core as core;
