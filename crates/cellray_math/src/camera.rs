use glam::{Mat3, Vec3};
use serde::{Deserialize, Serialize};

use crate::{apply_matrix, multiply_matrix, rotation_x, rotation_y};

/// First-person camera pose: a position plus yaw and pitch in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl CameraPose {
    /// Create a new camera pose
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        Self {
            position,
            yaw,
            pitch,
        }
    }

    /// Camera orientation: yaw applied after pitch.
    pub fn rotation(&self) -> Mat3 {
        multiply_matrix(rotation_y(self.yaw), rotation_x(self.pitch))
    }

    /// World-space view direction (the rotated +Z axis).
    pub fn forward(&self) -> Vec3 {
        apply_matrix(Vec3::Z, self.rotation()).normalize_or_zero()
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 0.0, 0.0)
    }
}
