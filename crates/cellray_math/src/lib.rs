// Re-export glam for convenience
pub use glam::*;

// Cellray math types
mod bounds;
mod camera;
mod interval;
mod ray;
mod rotation;

pub use bounds::BoundingSphere;
pub use camera::CameraPose;
pub use interval::Interval;
pub use ray::Ray;
pub use rotation::{apply_matrix, multiply_matrix, rotate_around_point, rotation_x, rotation_y};

/// Tolerance shared by the intersection routines.
pub const EPSILON: f32 = 1e-6;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::new(3.0, 4.0, 0.0).length(), 5.0);
    }

    #[test]
    fn test_normalize_zero_is_zero() {
        // The renderer relies on this never producing NaN
        let n = Vec3::ZERO.normalize_or_zero();
        assert_eq!(n, Vec3::ZERO);
        assert!(!n.is_nan());
    }

    #[test]
    fn test_normalize_unit_length() {
        let n = Vec3::new(5.0, 10.0, 5.0).normalize_or_zero();
        assert!((n.length() - 1.0).abs() < 1e-6);
    }
}
