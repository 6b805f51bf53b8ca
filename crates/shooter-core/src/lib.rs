//! Core types and definitions for the fireball shooter.
//!
//! This crate defines the vocabulary shared across the other crates:
//! components, commands, frame input, render snapshots, events, the camera
//! model and tuning constants. It has no dependency on the ECS or on any
//! windowing/rendering framework.

pub mod camera;
pub mod commands;
pub mod components;
pub mod constants;
pub mod events;
pub mod figure;
pub mod state;
pub mod types;
