//! Scene file codec.
//!
//! Line-oriented, whitespace-separated text with no header:
//! ```text
//! <projectile count>
//! <pos.x> <pos.y> <pos.z>            one pair of lines per projectile
//! <vel.x> <vel.y> <vel.z>
//! <enemy count>
//! <pos.x> <pos.y> <pos.z>            one pair of lines per enemy
//! <rot.x> <rot.y> <rot.z> <rot.w>
//! <score>
//! ```
//! Numbers are written with `Display` (shortest text that reads back to the
//! same value). The reader is a plain whitespace tokenizer, so line breaks are
//! not significant and anything after the score is ignored.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use std::str::{FromStr, SplitAsciiWhitespace};

use glam::{Quat, Vec3};

use shooter_core::types::{EnemyRecord, ProjectileRecord};

/// Everything persisted in a scene file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub projectiles: Vec<ProjectileRecord>,
    pub enemies: Vec<EnemyRecord>,
    /// Enemies destroyed.
    pub score: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("scene data ended while reading {what}")]
    UnexpectedEnd { what: &'static str },
    #[error("invalid {what}: {token:?}")]
    InvalidNumber { what: &'static str, token: String },
}

/// Write a scene in the text format.
pub fn encode<W: Write>(mut out: W, scene: &Scene) -> Result<(), SceneError> {
    writeln!(out, "{}", scene.projectiles.len())?;
    for p in &scene.projectiles {
        writeln!(out, "{} {} {}", p.position.x, p.position.y, p.position.z)?;
        writeln!(out, "{} {} {}", p.velocity.x, p.velocity.y, p.velocity.z)?;
    }

    writeln!(out, "{}", scene.enemies.len())?;
    for e in &scene.enemies {
        writeln!(out, "{} {} {}", e.position.x, e.position.y, e.position.z)?;
        let q = e.orientation;
        writeln!(out, "{} {} {} {}", q.x, q.y, q.z, q.w)?;
    }

    writeln!(out, "{}", scene.score)?;
    Ok(())
}

/// Read a complete scene. Nothing is returned unless every field parsed.
pub fn decode<R: Read>(mut input: R) -> Result<Scene, SceneError> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    from_str(&text)
}

pub fn to_string(scene: &Scene) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = encode(&mut buf, scene);
    String::from_utf8_lossy(&buf).into_owned()
}

pub fn from_str(text: &str) -> Result<Scene, SceneError> {
    let mut tokens = Tokens::new(text);

    let projectile_count: usize = tokens.parse("projectile count")?;
    let mut projectiles = Vec::with_capacity(projectile_count.min(1024));
    for _ in 0..projectile_count {
        let position = tokens.vec3("projectile position")?;
        let velocity = tokens.vec3("projectile velocity")?;
        projectiles.push(ProjectileRecord::new(position, velocity));
    }

    let enemy_count: usize = tokens.parse("enemy count")?;
    let mut enemies = Vec::with_capacity(enemy_count.min(1024));
    for _ in 0..enemy_count {
        let position = tokens.vec3("enemy position")?;
        let orientation = tokens.quat("enemy rotation")?;
        enemies.push(EnemyRecord::new(position, orientation));
    }

    let score = tokens.parse("score")?;

    Ok(Scene {
        projectiles,
        enemies,
        score,
    })
}

/// Write a scene file, replacing any existing file.
pub fn save_to_file(path: &Path, scene: &Scene) -> Result<(), SceneError> {
    let mut out = BufWriter::new(File::create(path)?);
    encode(&mut out, scene)?;
    out.flush()?;
    Ok(())
}

pub fn load_from_file(path: &Path) -> Result<Scene, SceneError> {
    decode(File::open(path)?)
}

struct Tokens<'a> {
    inner: SplitAsciiWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_ascii_whitespace(),
        }
    }

    fn parse<T: FromStr>(&mut self, what: &'static str) -> Result<T, SceneError> {
        let token = self
            .inner
            .next()
            .ok_or(SceneError::UnexpectedEnd { what })?;
        token.parse().map_err(|_| SceneError::InvalidNumber {
            what,
            token: token.to_string(),
        })
    }

    fn vec3(&mut self, what: &'static str) -> Result<Vec3, SceneError> {
        Ok(Vec3::new(
            self.parse(what)?,
            self.parse(what)?,
            self.parse(what)?,
        ))
    }

    fn quat(&mut self, what: &'static str) -> Result<Quat, SceneError> {
        Ok(Quat::from_xyzw(
            self.parse(what)?,
            self.parse(what)?,
            self.parse(what)?,
            self.parse(what)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_scene() -> Scene {
        Scene {
            projectiles: vec![
                ProjectileRecord::new(Vec3::new(0.1, -2.5, 3.0), Vec3::new(0.0, 0.0, -0.03)),
                ProjectileRecord::new(Vec3::new(1e-7, 12345.678, -0.333), Vec3::new(0.01, 0.02, 0.0)),
            ],
            enemies: vec![EnemyRecord::new(
                Vec3::new(-4.0, 5.5, -9.25),
                Quat::from_axis_angle(Vec3::new(1.0, 2.0, -3.0).normalize(), 1.234),
            )],
            score: 17,
        }
    }

    #[test]
    fn writes_expected_layout() {
        let scene = Scene {
            projectiles: vec![ProjectileRecord::new(
                Vec3::new(1.0, 2.0, 3.0),
                Vec3::new(0.5, 0.0, -1.5),
            )],
            enemies: vec![EnemyRecord::new(Vec3::new(0.0, 1.0, 0.0), Quat::IDENTITY)],
            score: 4,
        };
        assert_eq!(to_string(&scene), "1\n1 2 3\n0.5 0 -1.5\n1\n0 1 0\n0 0 0 1\n4\n");
    }

    #[test]
    fn empty_scene_round_trip() {
        let text = to_string(&Scene::default());
        assert_eq!(text, "0\n0\n0\n");
        assert_eq!(from_str(&text).unwrap(), Scene::default());
    }

    #[test]
    fn round_trip_is_exact() {
        let scene = sample_scene();
        let back = from_str(&to_string(&scene)).unwrap();
        assert_eq!(back, scene);
    }

    #[test]
    fn line_breaks_are_not_significant() {
        let text = "1 1 2 3 4 5 6\n\n 1 0 0 0   0 0 0 1 9 trailing junk";
        let scene = from_str(text).unwrap();
        assert_eq!(scene.projectiles.len(), 1);
        assert_eq!(scene.projectiles[0].velocity, Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(scene.enemies.len(), 1);
        assert_eq!(scene.score, 9);
    }

    #[test]
    fn truncated_scene_is_rejected() {
        let text = "1\n1 2 3\n";
        match from_str(text) {
            Err(SceneError::UnexpectedEnd { what }) => assert_eq!(what, "projectile velocity"),
            other => panic!("expected UnexpectedEnd, got {other:?}"),
        }
    }

    #[test]
    fn bad_number_is_rejected() {
        let text = "0\n1\n0 zero 0\n0 0 0 1\n3\n";
        match from_str(text) {
            Err(SceneError::InvalidNumber { what, token }) => {
                assert_eq!(what, "enemy position");
                assert_eq!(token, "zero");
            }
            other => panic!("expected InvalidNumber, got {other:?}"),
        }
    }

    #[test]
    fn negative_count_is_rejected() {
        assert!(matches!(
            from_str("-1\n0\n0\n"),
            Err(SceneError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn save_and_load_file() {
        let path = std::env::temp_dir().join("shooter_test_scene_save_load.txt");
        let _ = std::fs::remove_file(&path);

        let scene = sample_scene();
        save_to_file(&path, &scene).unwrap();
        let loaded = load_from_file(&path).unwrap();
        assert_eq!(loaded, scene);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("shooter_test_scene_does_not_exist.txt");
        let _ = std::fs::remove_file(&path);
        assert!(matches!(load_from_file(&path), Err(SceneError::Io(_))));
    }
}
