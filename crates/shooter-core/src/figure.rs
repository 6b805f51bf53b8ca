//! Mesh shape descriptors handed to the renderer.
//!
//! A figure is plain data: a flat triangle list with one color per vertex.
//! The renderer uploads it once and reuses it for every instance.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::{ENEMY_COLLISION_RADIUS, PROJECTILE_COLLISION_RADIUS};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureDescriptor {
    /// Three vertices per triangle, no indexing.
    pub vertices: Vec<Vec3>,
    /// One RGB color per vertex.
    pub colors: Vec<Vec3>,
    pub triangle_count: usize,
}

impl FigureDescriptor {
    fn from_triangles(triangles: &[[Vec3; 3]], color_of: impl Fn(usize) -> Vec3) -> Self {
        let vertices: Vec<Vec3> = triangles.iter().flatten().copied().collect();
        let colors = (0..triangles.len())
            .flat_map(|i| std::iter::repeat(color_of(i)).take(3))
            .collect();
        Self {
            vertices,
            colors,
            triangle_count: triangles.len(),
        }
    }

    /// Number of vertices the draw call covers.
    pub fn vertex_count(&self) -> usize {
        self.triangle_count * 3
    }

    /// Radius of the smallest origin-centered sphere containing the figure.
    pub fn bounding_radius(&self) -> f32 {
        self.vertices
            .iter()
            .map(|v| v.length())
            .fold(0.0, f32::max)
    }
}

/// Enemy shape: a plumb bob (square bipyramid with a long lower tip),
/// sized to fit its collision sphere.
pub fn plumbob() -> FigureDescriptor {
    let r = ENEMY_COLLISION_RADIUS;
    let top = Vec3::new(0.0, r * 0.5, 0.0);
    let bottom = Vec3::new(0.0, -r, 0.0);
    let ring = [
        Vec3::new(r * 0.6, 0.0, 0.0),
        Vec3::new(0.0, 0.0, r * 0.6),
        Vec3::new(-r * 0.6, 0.0, 0.0),
        Vec3::new(0.0, 0.0, -r * 0.6),
    ];

    let mut triangles = Vec::with_capacity(8);
    for i in 0..ring.len() {
        let a = ring[i];
        let b = ring[(i + 1) % ring.len()];
        triangles.push([top, b, a]);
        triangles.push([bottom, a, b]);
    }

    FigureDescriptor::from_triangles(&triangles, |i| {
        if i % 2 == 0 {
            Vec3::new(0.2, 0.8, 0.2)
        } else {
            Vec3::new(0.1, 0.5, 0.1)
        }
    })
}

/// Fireball stand-in: a cube inscribed in the projectile's collision sphere.
pub fn fireball() -> FigureDescriptor {
    let h = PROJECTILE_COLLISION_RADIUS / 3f32.sqrt();
    let c = |x: f32, y: f32, z: f32| Vec3::new(x * h, y * h, z * h);
    let faces = [
        [c(-1., -1., 1.), c(1., -1., 1.), c(1., 1., 1.), c(-1., 1., 1.)],
        [c(1., -1., -1.), c(-1., -1., -1.), c(-1., 1., -1.), c(1., 1., -1.)],
        [c(-1., 1., 1.), c(1., 1., 1.), c(1., 1., -1.), c(-1., 1., -1.)],
        [c(-1., -1., -1.), c(1., -1., -1.), c(1., -1., 1.), c(-1., -1., 1.)],
        [c(1., -1., 1.), c(1., -1., -1.), c(1., 1., -1.), c(1., 1., 1.)],
        [c(-1., -1., -1.), c(-1., -1., 1.), c(-1., 1., 1.), c(-1., 1., -1.)],
    ];

    let triangles: Vec<[Vec3; 3]> = faces
        .iter()
        .flat_map(|[a, b, c, d]| [[*a, *b, *c], [*a, *c, *d]])
        .collect();

    FigureDescriptor::from_triangles(&triangles, |_| Vec3::new(1.0, 0.45, 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plumbob_has_eight_triangles() {
        let fig = plumbob();
        assert_eq!(fig.triangle_count, 8);
        assert_eq!(fig.vertices.len(), fig.vertex_count());
        assert_eq!(fig.colors.len(), fig.vertices.len());
    }

    #[test]
    fn fireball_is_a_closed_cube() {
        let fig = fireball();
        assert_eq!(fig.triangle_count, 12);
        assert_eq!(fig.vertices.len(), 36);
    }

    #[test]
    fn figures_fit_inside_collision_spheres() {
        assert!(plumbob().bounding_radius() <= ENEMY_COLLISION_RADIUS + 1e-6);
        assert!(fireball().bounding_radius() <= PROJECTILE_COLLISION_RADIUS + 1e-6);
    }
}
