//! Rigid triangle meshes with optional gravity.

use cellray_core::SceneError;

use crate::{
    hittable::{Intersection, SceneObject},
    BoundingSphere, Ray, Triangle, Vec3,
};

/// A rigid body made of triangles.
///
/// The mesh owns its triangles. `position` is a logical anchor used by the
/// ground clamp; it moves together with every vertex.
#[derive(Debug, Clone)]
pub struct Mesh {
    triangles: Vec<Triangle>,
    position: Vec3,
    velocity: Vec3,
    gravity: bool,
}

impl Mesh {
    /// Create a static mesh anchored at `position`.
    pub fn new(triangles: Vec<Triangle>, position: Vec3) -> Result<Self, SceneError> {
        if triangles.is_empty() {
            return Err(SceneError::EmptyMesh);
        }

        Ok(Self {
            triangles,
            position,
            velocity: Vec3::ZERO,
            gravity: false,
        })
    }

    /// Enable or disable gravity for this mesh.
    pub fn with_gravity(mut self, gravity: bool) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the initial velocity.
    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn has_gravity(&self) -> bool {
        self.gravity
    }

    /// Move the anchor and every vertex by `delta`.
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
        for tri in &mut self.triangles {
            tri.translate(delta);
        }
    }
}

impl SceneObject for Mesh {
    fn intersect(&self, ray: &Ray) -> Option<Intersection<'_>> {
        let mut closest: Option<Intersection<'_>> = None;

        for tri in &self.triangles {
            if let Some(hit) = tri.intersect(ray) {
                if closest.map_or(true, |c| hit.dist < c.dist) {
                    closest = Some(hit);
                }
            }
        }

        // Report the body, not the inner triangle
        closest.map(|hit| Intersection {
            object: self,
            ..hit
        })
    }

    fn update(&mut self, dt: f32, gravity: f32, ground_level: f32) {
        if !self.gravity {
            return;
        }

        self.velocity.y += gravity * dt;
        self.translate(self.velocity * dt);

        if self.position.y < ground_level {
            let depth = ground_level - self.position.y;
            self.translate(Vec3::new(0.0, depth, 0.0));
            self.position.y = ground_level;
            self.velocity.y = 0.0;
            log::trace!("mesh landed at y = {ground_level}");
        }
    }

    fn bounding_sphere(&self) -> BoundingSphere {
        let vertices: Vec<Vec3> = self.triangles.iter().flat_map(|t| t.vertices()).collect();
        BoundingSphere::from_points(&vertices).unwrap_or(BoundingSphere::DEGENERATE)
    }

    fn kind(&self) -> &'static str {
        "mesh"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    fn quad(z: f32) -> Vec<Triangle> {
        let c = Color::new(200.0, 200.0, 200.0);
        let v0 = Vec3::new(-1.0, -1.0, z);
        let v1 = Vec3::new(-1.0, 1.0, z);
        let v2 = Vec3::new(1.0, 1.0, z);
        let v3 = Vec3::new(1.0, -1.0, z);
        vec![Triangle::new(v0, v1, v2, c), Triangle::new(v0, v2, v3, c)]
    }

    #[test]
    fn test_empty_mesh_is_rejected() {
        let err = Mesh::new(Vec::new(), Vec3::ZERO).unwrap_err();
        assert_eq!(err, SceneError::EmptyMesh);
    }

    #[test]
    fn test_hit_reports_mesh() {
        let mesh = Mesh::new(quad(3.0), Vec3::ZERO).unwrap();
        let hit = mesh.intersect(&Ray::new(Vec3::new(0.2, 0.3, 0.0), Vec3::Z)).unwrap();

        assert!((hit.dist - 3.0).abs() < 1e-5);
        assert!(hit.is_from(&mesh));
        assert!(!hit.is_from(&mesh.triangles()[0]));
        assert!(!hit.is_from(&mesh.triangles()[1]));
    }

    #[test]
    fn test_nearest_triangle_wins() {
        let mut triangles = quad(5.0);
        triangles.extend(quad(2.0));
        let mesh = Mesh::new(triangles, Vec3::ZERO).unwrap();

        let hit = mesh.intersect(&Ray::new(Vec3::new(0.2, 0.3, 0.0), Vec3::Z)).unwrap();
        assert!((hit.dist - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_translate_preserves_shape() {
        let mut mesh = Mesh::new(quad(3.0), Vec3::ZERO).unwrap();
        let before: Vec<[Vec3; 3]> = mesh.triangles().iter().map(|t| t.vertices()).collect();
        let normals: Vec<Vec3> = mesh.triangles().iter().map(|t| t.normal()).collect();

        let delta = Vec3::new(1.5, -2.0, 0.25);
        mesh.translate(delta);

        assert_eq!(mesh.position(), delta);
        for (tri, (old, normal)) in mesh.triangles().iter().zip(before.iter().zip(&normals)) {
            let new = tri.vertices();
            for k in 0..3 {
                assert!((new[k] - (old[k] + delta)).length() < 1e-5);
                let (a, b) = (k, (k + 1) % 3);
                let d_old = (old[a] - old[b]).length();
                let d_new = (new[a] - new[b]).length();
                assert!((d_old - d_new).abs() < 1e-5);
            }
            assert!((tri.normal() - *normal).length() < 1e-5);
        }
    }

    #[test]
    fn test_gravity_lands_on_ground() {
        let mut mesh = Mesh::new(quad(3.0), Vec3::new(0.0, 2.0, 0.0))
            .unwrap()
            .with_gravity(true);

        for _ in 0..200 {
            mesh.update(0.05, -9.8, 0.0);
        }

        assert_eq!(mesh.position().y, 0.0);
        assert_eq!(mesh.velocity().y, 0.0);
    }

    #[test]
    fn test_ground_clamp_moves_vertices() {
        let mut mesh = Mesh::new(quad(3.0), Vec3::new(0.0, 0.01, 0.0))
            .unwrap()
            .with_gravity(true)
            .with_velocity(Vec3::new(0.0, -1.0, 0.0));

        mesh.update(0.05, -9.8, 0.0);

        assert_eq!(mesh.position().y, 0.0);
        assert_eq!(mesh.velocity().y, 0.0);
        // Vertices were lifted by the same depth: net drop equals the 0.01 above ground
        let lowest = mesh
            .triangles()
            .iter()
            .flat_map(|t| t.vertices())
            .map(|v| v.y)
            .fold(f32::INFINITY, f32::min);
        assert!((lowest - (-1.01)).abs() < 1e-4);
    }

    #[test]
    fn test_no_gravity_no_motion() {
        let mut mesh = Mesh::new(quad(3.0), Vec3::new(0.0, 4.0, 0.0))
            .unwrap()
            .with_velocity(Vec3::new(1.0, 1.0, 1.0));
        let before = mesh.triangles().to_vec();

        mesh.update(0.05, -9.8, 0.0);

        assert_eq!(mesh.position(), Vec3::new(0.0, 4.0, 0.0));
        assert_eq!(mesh.triangles(), before.as_slice());
    }

    #[test]
    fn test_horizontal_velocity_carries() {
        let mut mesh = Mesh::new(quad(3.0), Vec3::ZERO)
            .unwrap()
            .with_gravity(true)
            .with_velocity(Vec3::new(2.0, 0.0, 0.0));

        mesh.update(0.5, -9.8, 0.0);

        assert!((mesh.position().x - 1.0).abs() < 1e-6);
        assert_eq!(mesh.position().y, 0.0);
    }

    #[test]
    fn test_bounding_sphere_covers_vertices() {
        let mesh = Mesh::new(quad(3.0), Vec3::ZERO).unwrap();
        let bounds = mesh.bounding_sphere();

        assert!((bounds.center - Vec3::new(0.0, 0.0, 3.0)).length() < 1e-5);
        assert!((bounds.radius - 2.0_f32.sqrt()).abs() < 1e-5);
    }
}
