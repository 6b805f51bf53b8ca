//! Frame snapshot: the complete drawable state handed to the renderer each tick.

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::camera::CameraPose;
use crate::events::SimEvent;
use crate::types::SimTime;

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub camera: CameraPose,
    pub view_projection: Mat4,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    /// Enemies destroyed so far.
    pub score: u32,
    pub events: Vec<SimEvent>,
}

impl Default for FrameSnapshot {
    fn default() -> Self {
        Self {
            time: SimTime::default(),
            camera: CameraPose::default(),
            view_projection: Mat4::IDENTITY,
            enemies: Vec::new(),
            projectiles: Vec::new(),
            score: 0,
            events: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub position: Vec3,
    pub orientation: Quat,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Vec3,
}

impl EnemyView {
    /// Model matrix: translate then rotate.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position)
    }
}

impl ProjectileView {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
    }
}
