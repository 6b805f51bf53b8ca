//! Frontend collaborators: where camera input comes from and where frames go.
//!
//! The engine never talks to a window. The frame loop asks a
//! `CameraController` for each frame's input and hands the resulting snapshot
//! to a `Renderer`. The implementations here are headless: a scripted camera
//! and a renderer that only logs what it would draw.

use glam::Vec2;
use tracing::trace;

use shooter_core::camera::{ControlInput, FlyCamera};
use shooter_core::commands::FrameInput;
use shooter_core::figure::{self, FigureDescriptor};
use shooter_core::state::FrameSnapshot;

/// Source of per-frame camera pose and fire input.
pub trait CameraController {
    /// Input for the next frame, covering `dt_secs` seconds.
    fn next_frame(&mut self, dt_secs: f64) -> FrameInput;

    /// True once the user (or script) has asked to quit.
    fn exit_requested(&self) -> bool;
}

/// Consumer of finished frames.
pub trait Renderer {
    fn draw(&mut self, frame: &FrameSnapshot);
}

/// Horizontal look sweep, in cursor pixels per frame.
const SWEEP_PIXELS_PER_FRAME: f32 = 2.0;
/// Frames spent walking forward, then the same number standing still.
const WALK_PHASE_FRAMES: u64 = 120;

/// Camera that turns slowly in place, paces back and forth, and pulls the
/// trigger every `fire_every` frames.
#[derive(Debug, Clone)]
pub struct ScriptedController {
    camera: FlyCamera,
    frame: u64,
    max_frames: u64,
    fire_every: u64,
}

impl ScriptedController {
    /// `fire_every == 0` never fires.
    pub fn new(max_frames: u64, fire_every: u64) -> Self {
        Self {
            camera: FlyCamera::default(),
            frame: 0,
            max_frames,
            fire_every,
        }
    }

    /// Frames produced so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    fn control_for(&self, frame: u64) -> ControlInput {
        let walking = (frame / WALK_PHASE_FRAMES) % 2 == 0;
        let heading_out = (frame / (WALK_PHASE_FRAMES * 2)) % 2 == 0;
        ControlInput {
            look_delta: Vec2::new(SWEEP_PIXELS_PER_FRAME, 0.0),
            forward: walking && heading_out,
            back: walking && !heading_out,
            ..Default::default()
        }
    }
}

impl CameraController for ScriptedController {
    fn next_frame(&mut self, dt_secs: f64) -> FrameInput {
        let control = self.control_for(self.frame);
        self.camera.update(&control, dt_secs as f32);

        let fire = self.fire_every > 0 && self.frame % self.fire_every == 0;
        self.frame += 1;

        FrameInput {
            camera: self.camera.pose(),
            view_projection: self.camera.view_projection(),
            fire,
            dt_secs,
        }
    }

    fn exit_requested(&self) -> bool {
        self.frame >= self.max_frames
    }
}

/// Running totals of what a renderer was asked to draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub frames: u64,
    pub draw_calls: u64,
    pub triangles: u64,
    /// Draw calls whose origin landed in front of the camera.
    pub in_front: u64,
}

/// Renderer that logs draw calls instead of issuing them.
#[derive(Debug, Clone)]
pub struct LogRenderer {
    enemy_figure: FigureDescriptor,
    projectile_figure: FigureDescriptor,
    stats: RenderStats,
}

impl Default for LogRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl LogRenderer {
    pub fn new() -> Self {
        Self {
            enemy_figure: figure::plumbob(),
            projectile_figure: figure::fireball(),
            stats: RenderStats::default(),
        }
    }

    pub fn stats(&self) -> RenderStats {
        self.stats
    }
}

impl Renderer for LogRenderer {
    fn draw(&mut self, frame: &FrameSnapshot) {
        let enemy_mvps = frame
            .enemies
            .iter()
            .map(|e| frame.view_projection * e.model_matrix());
        let projectile_mvps = frame
            .projectiles
            .iter()
            .map(|p| frame.view_projection * p.model_matrix());

        let mut in_front = 0;
        for mvp in enemy_mvps.chain(projectile_mvps) {
            // Clip-space w of the model origin.
            if mvp.w_axis.w > 0.0 {
                in_front += 1;
            }
        }

        let triangles = frame.enemies.len() * self.enemy_figure.triangle_count
            + frame.projectiles.len() * self.projectile_figure.triangle_count;
        let draw_calls = frame.enemies.len() + frame.projectiles.len();

        self.stats.frames += 1;
        self.stats.draw_calls += draw_calls as u64;
        self.stats.triangles += triangles as u64;
        self.stats.in_front += in_front;

        trace!(
            tick = frame.time.tick,
            enemies = frame.enemies.len(),
            projectiles = frame.projectiles.len(),
            triangles,
            in_front,
            score = frame.score,
            "frame drawn"
        );
    }
}
