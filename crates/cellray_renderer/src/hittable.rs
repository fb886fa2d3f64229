//! SceneObject trait and Intersection for ray-object intersection.

use std::fmt;

use crate::{BoundingSphere, Color, Ray, Vec3};

/// Record of a ray-object intersection.
#[derive(Clone, Copy)]
pub struct Intersection<'a> {
    /// Distance along the ray (always past the hit epsilon)
    pub dist: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Outward unit surface normal
    pub normal: Vec3,
    /// Surface color at the intersection
    pub color: Color,
    /// The object that was struck
    pub object: &'a dyn SceneObject,
}

impl<'a> Intersection<'a> {
    /// True if this hit was produced by `other` (compared by address).
    pub fn is_from(&self, other: &dyn SceneObject) -> bool {
        std::ptr::eq(
            self.object as *const dyn SceneObject as *const u8,
            other as *const dyn SceneObject as *const u8,
        )
    }
}

impl fmt::Debug for Intersection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Intersection")
            .field("dist", &self.dist)
            .field("point", &self.point)
            .field("normal", &self.normal)
            .field("color", &self.color)
            .field("object", &self.object.kind())
            .finish()
    }
}

/// Trait for anything the renderer can put in a scene.
pub trait SceneObject: Send + Sync {
    /// Nearest hit of `ray` against this object, if any.
    fn intersect(&self, ray: &Ray) -> Option<Intersection<'_>>;

    /// Advance one simulation step. Static objects keep the default no-op.
    fn update(&mut self, _dt: f32, _gravity: f32, _ground_level: f32) {}

    /// Conservative bound for broad-phase overlap tests.
    ///
    /// Shapes without a meaningful bound report a zero-radius sphere at the origin.
    fn bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::DEGENERATE
    }

    /// Short name used in logs.
    fn kind(&self) -> &'static str;
}

/// An ordered list of scene objects.
///
/// Order matters: when two objects are hit at exactly the same distance,
/// the one added first wins.
#[derive(Default)]
pub struct Scene {
    objects: Vec<Box<dyn SceneObject>>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the end of the list.
    pub fn add(&mut self, object: Box<dyn SceneObject>) {
        self.objects.push(object);
    }

    /// Builder-style `add`.
    pub fn with(mut self, object: impl SceneObject + 'static) -> Self {
        self.add(Box::new(object));
        self
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// The objects in insertion order.
    pub fn objects(&self) -> &[Box<dyn SceneObject>] {
        &self.objects
    }

    /// Nearest hit over every object.
    pub fn closest_hit(&self, ray: &Ray) -> Option<Intersection<'_>> {
        let mut closest: Option<Intersection<'_>> = None;

        for object in &self.objects {
            if let Some(hit) = object.intersect(ray) {
                if closest.map_or(true, |c| hit.dist < c.dist) {
                    closest = Some(hit);
                }
            }
        }

        closest
    }

    /// Run one physics step on every object.
    pub fn step(&mut self, dt: f32, gravity: f32, ground_level: f32) {
        for object in &mut self.objects {
            object.update(dt, gravity, ground_level);
        }
    }
}

impl fmt::Debug for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.objects.iter().map(|o| o.kind()))
            .finish()
    }
}
