//! Per-frame render settings plus the physics and player tuning used by the driver.

use std::f32::consts::PI;

use cellray_math::{CameraPose, Vec3};
use serde::{Deserialize, Serialize};

use crate::{Color, SettingsError};

/// Largest accepted `aa_sample_sqrt`.
pub const MAX_SAMPLES_PER_AXIS: i32 = 64;

/// Direction of the ray used to test whether a hit point is shadowed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadowMode {
    /// Cast along the negated surface normal.
    ///
    /// Every built-in shape faces outward, so this ray points into the
    /// surface and finds no occluder: shadows disappear in this mode.
    SurfaceNormal,
    /// Cast against the light direction, toward the light.
    #[default]
    TowardLight,
}

/// Immutable configuration for one rendered frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Output grid width in cells
    pub width: usize,
    /// Output grid height in cells
    pub height: usize,
    /// Vertical field of view in radians
    pub fov: f32,
    /// Camera position and orientation
    pub camera: CameraPose,
    /// Sky color straight up
    pub sky_top: Color,
    /// Sky color straight down
    pub sky_bottom: Color,
    /// Fraction of the surface color that is always lit, in [0, 1]
    pub ambient: f32,
    /// Direction the light travels (world space, expected non-zero)
    pub light_dir: Vec3,
    /// Antialiasing density: N means N x N samples per cell. Values <= 0 mean 1.
    pub aa_sample_sqrt: i32,
    /// How shadow rays are aimed
    pub shadow_mode: ShadowMode,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 90,
            height: 45,
            fov: PI / 3.0,
            camera: CameraPose::default(),
            sky_top: Color::new(135.0, 206.0, 250.0),
            sky_bottom: Color::new(115.0, 186.0, 230.0),
            ambient: 0.2,
            light_dir: Vec3::new(-5.0, -10.0, -5.0).normalize(),
            aa_sample_sqrt: 2,
            shadow_mode: ShadowMode::default(),
        }
    }
}

impl RenderSettings {
    /// Reject settings that would make the projection degenerate.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.fov.is_finite() || self.fov <= 0.0 || self.fov >= PI {
            return Err(SettingsError::InvalidFieldOfView(self.fov));
        }
        if self.aa_sample_sqrt > MAX_SAMPLES_PER_AXIS {
            return Err(SettingsError::AntialiasingTooLarge(self.aa_sample_sqrt));
        }
        Ok(())
    }

    /// Samples per axis, with invalid densities coerced to 1.
    pub fn samples_per_axis(&self) -> u32 {
        if self.aa_sample_sqrt > 0 {
            self.aa_sample_sqrt as u32
        } else {
            1
        }
    }

    /// Total sub-samples per cell.
    pub fn samples_per_cell(&self) -> u32 {
        let n = self.samples_per_axis();
        n.saturating_mul(n)
    }

    /// Grid aspect ratio (width / height).
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Number of cells in the output grid.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

/// Fixed-step simulation constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsSettings {
    /// Vertical acceleration (negative pulls down)
    pub gravity: f32,
    /// World y-coordinate of the ground plane
    pub ground_level: f32,
    /// Simulation step in seconds
    pub time_step: f32,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            gravity: -9.8,
            ground_level: 0.0,
            time_step: 0.05,
        }
    }
}

/// First-person player tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    pub start_position: Vec3,
    /// Camera height above the player's feet
    pub eye_height: f32,
    /// Distance covered per movement key press
    pub move_speed: f32,
    /// Radians turned per look key press
    pub turn_speed: f32,
    /// Initial upward velocity of a jump
    pub jump_speed: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            start_position: Vec3::new(0.0, 0.0, -5.0),
            eye_height: 1.6,
            move_speed: 0.5,
            turn_speed: 0.05,
            jump_speed: 5.0,
        }
    }
}
