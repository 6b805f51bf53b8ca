//! Fire control: turns the fire button into projectiles, gated by a cooldown.

use glam::Vec3;
use tracing::trace;

use shooter_core::constants::{FIRE_COOLDOWN_SECS, PROJECTILE_SPEED};
use shooter_core::types::ProjectileRecord;

/// Tracks when the last shot left the camera.
#[derive(Debug, Clone, Default)]
pub struct FireControl {
    last_shot_secs: Option<f64>,
}

impl FireControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a projectile if fire is held and the cooldown has elapsed.
    ///
    /// The first shot is always allowed. The projectile starts at the camera
    /// and travels along its forward direction at `PROJECTILE_SPEED` per tick.
    pub fn maybe_spawn_projectile(
        &mut self,
        fire: bool,
        now_secs: f64,
        camera_position: Vec3,
        camera_direction: Vec3,
    ) -> Option<ProjectileRecord> {
        if !fire {
            return None;
        }
        if let Some(last) = self.last_shot_secs {
            if now_secs - last < FIRE_COOLDOWN_SECS {
                trace!(now_secs, last, "fire on cooldown");
                return None;
            }
        }

        self.last_shot_secs = Some(now_secs);
        Some(ProjectileRecord::new(
            camera_position,
            camera_direction * PROJECTILE_SPEED,
        ))
    }

    /// Seconds until the next shot is allowed (0 when ready).
    pub fn cooldown_remaining(&self, now_secs: f64) -> f64 {
        self.last_shot_secs
            .map(|last| (FIRE_COOLDOWN_SECS - (now_secs - last)).max(0.0))
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_fire_no_projectile() {
        let mut fc = FireControl::new();
        assert!(fc
            .maybe_spawn_projectile(false, 10.0, Vec3::ZERO, Vec3::NEG_Z)
            .is_none());
        assert_eq!(fc.cooldown_remaining(10.0), 0.0);
    }

    #[test]
    fn first_shot_uses_camera_pose() {
        let mut fc = FireControl::new();
        let p = fc
            .maybe_spawn_projectile(true, 0.0, Vec3::new(1.0, 2.0, 3.0), Vec3::NEG_Z)
            .unwrap();
        assert_eq!(p.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(p.velocity, Vec3::new(0.0, 0.0, -PROJECTILE_SPEED));
    }

    #[test]
    fn second_shot_blocked_until_cooldown_elapses() {
        let mut fc = FireControl::new();
        assert!(fc.maybe_spawn_projectile(true, 1.0, Vec3::ZERO, Vec3::X).is_some());
        assert!(fc.maybe_spawn_projectile(true, 1.1, Vec3::ZERO, Vec3::X).is_none());
        assert!(fc.maybe_spawn_projectile(true, 1.29, Vec3::ZERO, Vec3::X).is_none());
        assert!(fc.cooldown_remaining(1.1) > 0.0);
        assert!(fc.maybe_spawn_projectile(true, 1.31, Vec3::ZERO, Vec3::X).is_some());
    }

    #[test]
    fn blocked_attempts_do_not_reset_cooldown() {
        let mut fc = FireControl::new();
        fc.maybe_spawn_projectile(true, 0.0, Vec3::ZERO, Vec3::X);
        fc.maybe_spawn_projectile(true, 0.2, Vec3::ZERO, Vec3::X);
        assert!(fc.maybe_spawn_projectile(true, 0.31, Vec3::ZERO, Vec3::X).is_some());
    }

    #[test]
    fn rapid_fire_yields_at_most_one_shot_per_window() {
        let mut fc = FireControl::new();
        let mut shots = Vec::new();
        // Request fire every millisecond for three seconds.
        for ms in 0..3000 {
            let now = ms as f64 / 1000.0;
            if fc.maybe_spawn_projectile(true, now, Vec3::ZERO, Vec3::X).is_some() {
                shots.push(now);
            }
        }
        assert_eq!(shots.len(), 10);
        for pair in shots.windows(2) {
            assert!(pair[1] - pair[0] >= FIRE_COOLDOWN_SECS - 1e-9);
        }
    }
}
