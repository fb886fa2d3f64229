//! Sphere primitive for ray tracing.

use cellray_math::Interval;

use crate::{
    hittable::{Intersection, SceneObject},
    BoundingSphere, Color, Ray, Vec3,
};

/// A sphere primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    color: Color,
}

impl Sphere {
    /// Create a new sphere. Negative radii are clamped to zero.
    pub fn new(center: Vec3, radius: f32, color: Color) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            color,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl SceneObject for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<Intersection<'_>> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().dot(ray.direction());
        let b = 2.0 * oc.dot(ray.direction());
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Nearer root first; if it is behind the origin try the far one
        let mut t = (-b - sqrtd) / (2.0 * a);
        if !Interval::IN_FRONT.surrounds(t) {
            t = (-b + sqrtd) / (2.0 * a);
            if !Interval::IN_FRONT.surrounds(t) {
                return None;
            }
        }

        let point = ray.at(t);
        Some(Intersection {
            dist: t,
            point,
            normal: (point - self.center).normalize_or_zero(),
            color: self.color,
            object: self,
        })
    }

    fn bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::new(self.center, self.radius)
    }

    fn kind(&self) -> &'static str {
        "sphere"
    }
}
