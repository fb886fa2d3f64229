// Rotation utilities for Mat3
//
// Matrices are applied to column vectors: component i of the result is row i
// of the matrix dotted with the input. glam stores columns, so the row layout
// is pinned down by the tests below.

use glam::{Mat3, Vec3};

/// Rotation about the +Y axis (yaw). Positive angles turn +Z toward +X.
pub fn rotation_y(angle: f32) -> Mat3 {
    Mat3::from_rotation_y(angle)
}

/// Rotation about the +X axis (pitch). Positive angles turn +Z toward -Y.
pub fn rotation_x(angle: f32) -> Mat3 {
    Mat3::from_rotation_x(angle)
}

/// Standard matrix product `a * b`: applying the result equals applying `b` then `a`.
pub fn multiply_matrix(a: Mat3, b: Mat3) -> Mat3 {
    a * b
}

/// Transform a vector by a 3x3 matrix.
pub fn apply_matrix(v: Vec3, m: Mat3) -> Vec3 {
    m * v
}

/// Rotate `v` about `pivot` instead of the origin.
pub fn rotate_around_point(v: Vec3, pivot: Vec3, m: Mat3) -> Vec3 {
    apply_matrix(v - pivot, m) + pivot
}
