//! First-person camera model.
//!
//! The simulation only ever reads a `CameraPose`. `FlyCamera` is the
//! controller-side model that turns accumulated look/move input into a pose
//! and the view/projection matrices the renderer needs. Matrices are returned
//! as values; nothing is stored globally.

use glam::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Camera position and look direction for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Vec3,
    /// Unit forward vector.
    pub forward: Vec3,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            forward: Vec3::NEG_Z,
        }
    }
}

/// Raw control state for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControlInput {
    /// Cursor offset from the viewport center in pixels (x right, y down).
    pub look_delta: Vec2,
    pub forward: bool,
    pub back: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
}

/// Mouse-look + WASD camera.
#[derive(Debug, Clone)]
pub struct FlyCamera {
    position: Vec3,
    horizontal_angle: f32,
    vertical_angle: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl FlyCamera {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            horizontal_angle: CAMERA_INITIAL_HORIZONTAL_ANGLE,
            vertical_angle: 0.0,
        }
    }

    /// Apply one frame of input covering `dt_secs` seconds.
    pub fn update(&mut self, input: &ControlInput, dt_secs: f32) {
        self.horizontal_angle -= CAMERA_MOUSE_SPEED * input.look_delta.x;
        self.vertical_angle -= CAMERA_MOUSE_SPEED * input.look_delta.y;

        let direction = self.direction();
        let right = self.right();
        let step = dt_secs * CAMERA_MOVE_SPEED;

        if input.forward {
            self.position += direction * step;
        }
        if input.back {
            self.position -= direction * step;
        }
        if input.strafe_right {
            self.position += right * step;
        }
        if input.strafe_left {
            self.position -= right * step;
        }
    }

    /// Spherical look angles to a Cartesian direction.
    pub fn direction(&self) -> Vec3 {
        let (sin_v, cos_v) = self.vertical_angle.sin_cos();
        let (sin_h, cos_h) = self.horizontal_angle.sin_cos();
        Vec3::new(cos_v * sin_h, sin_v, cos_v * cos_h)
    }

    fn right(&self) -> Vec3 {
        let h = self.horizontal_angle - std::f32::consts::FRAC_PI_2;
        Vec3::new(h.sin(), 0.0, h.cos())
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position,
            forward: self.direction(),
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        let direction = self.direction();
        let up = self.right().cross(direction);
        Mat4::look_at_rh(self.position, self.position + direction, up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(
            CAMERA_FOV_DEGREES.to_radians(),
            CAMERA_ASPECT,
            CAMERA_NEAR,
            CAMERA_FAR,
        )
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
