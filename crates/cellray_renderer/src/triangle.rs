//! Triangle primitive for ray tracing.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use cellray_math::{Interval, EPSILON};

use crate::{
    hittable::{Intersection, SceneObject},
    BoundingSphere, Color, Ray, Vec3,
};

/// A flat-shaded triangle primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    /// Vertices
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    /// Pre-computed face normal (unit length, zero for degenerate triangles)
    normal: Vec3,
    /// Surface color
    color: Color,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    ///
    /// The normal follows the winding: `(v1 - v0) x (v2 - v0)`.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, color: Color) -> Self {
        Self {
            v0,
            v1,
            v2,
            normal: face_normal(v0, v1, v2),
            color,
        }
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        [self.v0, self.v1, self.v2]
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Move all three vertices and refresh the normal.
    ///
    /// Only meshes move their triangles; a standalone triangle is immutable.
    pub(crate) fn translate(&mut self, delta: Vec3) {
        self.v0 += delta;
        self.v1 += delta;
        self.v2 += delta;
        self.recompute_normal();
    }

    pub(crate) fn recompute_normal(&mut self) {
        self.normal = face_normal(self.v0, self.v1, self.v2);
    }
}

fn face_normal(v0: Vec3, v1: Vec3, v2: Vec3) -> Vec3 {
    (v1 - v0).cross(v2 - v0).normalize_or_zero()
}

impl SceneObject for Triangle {
    /// Möller-Trumbore ray-triangle intersection algorithm.
    fn intersect(&self, ray: &Ray) -> Option<Intersection<'_>> {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let h = ray.direction().cross(edge2);
        let a = edge1.dot(h);

        // Ray is parallel to triangle
        if a.abs() < EPSILON {
            return None;
        }

        let f = 1.0 / a;
        let s = ray.origin() - self.v0;
        let u = f * s.dot(h);

        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = f * ray.direction().dot(q);

        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * edge2.dot(q);

        // Must be strictly in front of the origin
        if !Interval::IN_FRONT.surrounds(t) {
            return None;
        }

        Some(Intersection {
            dist: t,
            point: ray.at(t),
            normal: self.normal,
            color: self.color,
            object: self,
        })
    }

    fn bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::from_points(&self.vertices()).unwrap_or(BoundingSphere::DEGENERATE)
    }

    fn kind(&self) -> &'static str {
        "triangle"
    }
}
