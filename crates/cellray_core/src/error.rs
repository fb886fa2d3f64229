//! Error types shared by the Cellray crates.

use thiserror::Error;

/// Settings that would make the projection degenerate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettingsError {
    #[error("Field of view must be positive and finite, got {0}")]
    InvalidFieldOfView(f32),

    #[error("Antialiasing density {0} exceeds the maximum of {max}", max = crate::settings::MAX_SAMPLES_PER_AXIS)]
    AntialiasingTooLarge(i32),
}

/// Errors that can occur while loading a viewer configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid settings: {0}")]
    Invalid(#[from] SettingsError),
}

/// Errors raised while assembling scene geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Mesh must contain at least one triangle")]
    EmptyMesh,
}
