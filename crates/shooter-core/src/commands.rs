//! Inputs consumed by the simulation.
//!
//! `FrameInput` is read every tick. `PlayerCommand`s are queued and processed
//! at the next tick boundary, outside the per-frame systems.

use glam::Mat4;
use serde::{Deserialize, Serialize};

use crate::camera::CameraPose;
use crate::constants::DT;

/// Everything the frontend hands the core for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    pub camera: CameraPose,
    /// Projection * view for this frame, passed through to the renderer.
    pub view_projection: Mat4,
    /// Fire requested this frame.
    pub fire: bool,
    /// Wall time covered by this frame (seconds).
    pub dt_secs: f64,
}

impl Default for FrameInput {
    fn default() -> Self {
        Self {
            camera: CameraPose::default(),
            view_projection: Mat4::IDENTITY,
            fire: false,
            dt_secs: DT,
        }
    }
}

impl FrameInput {
    /// Fixed-rate frame for the given pose.
    pub fn at(camera: CameraPose) -> Self {
        Self {
            camera,
            ..Default::default()
        }
    }

    pub fn firing(mut self) -> Self {
        self.fire = true;
        self
    }
}

/// Scene management actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Write all live entities and the score to a scene file.
    SaveScene { path: String },
    /// Replace all live entities and the score with a scene file's contents.
    LoadScene { path: String },
    /// Drop every live entity. The score is kept.
    ClearScene,
}
