use crate::Vec3;

/// A bounding sphere for broad-phase overlap tests.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoundingSphere {
    pub center: Vec3,
    pub radius: f32,
}

impl BoundingSphere {
    /// Create a bounding sphere from a center and radius.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Bound a point cloud: the centroid is the center and the farthest
    /// point from it sets the radius.
    ///
    /// Returns `None` for an empty point set, which has no centroid.
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let sum = points.iter().fold(Vec3::ZERO, |acc, p| acc + *p);
        let center = sum * (1.0 / points.len() as f32);
        let radius = points
            .iter()
            .map(|p| (*p - center).length())
            .fold(0.0_f32, f32::max);

        Some(Self { center, radius })
    }

    /// True if the two spheres touch or overlap.
    ///
    /// Conservative: never misses a real overlap of the bounded shapes, but
    /// may report one that isn't there.
    pub fn overlaps(&self, other: &BoundingSphere) -> bool {
        let distance = (self.center - other.center).length();
        distance <= self.radius + other.radius
    }

    /// Zero-radius sphere at the origin, for shapes that have no bound.
    pub const DEGENERATE: BoundingSphere = BoundingSphere {
        center: Vec3::ZERO,
        radius: 0.0,
    };
}
