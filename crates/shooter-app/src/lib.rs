//! Headless shooter demo.
//!
//! Wires the simulation engine to a camera controller and a renderer and
//! drives them from a fixed-rate frame loop.

pub mod frontend;
pub mod game_loop;

pub use shooter_core as core;
