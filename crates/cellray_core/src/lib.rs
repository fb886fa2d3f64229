//! Cellray Core - renderer-agnostic data for the terminal ray tracer.
//!
//! This crate provides:
//!
//! - **Colors**: floating surface colors and resolved 8-bit cell colors
//! - **Settings**: per-frame render settings, physics and player tuning
//! - **Config**: JSON loading of the viewer configuration
//!
//! # Example
//!
//! ```ignore
//! use cellray_core::ViewerConfig;
//!
//! let config = ViewerConfig::load("cellray.json")?;
//! println!("Rendering {}x{} cells", config.render.width, config.render.height);
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod settings;

// Re-export commonly used types
pub use color::{Color, Rgb8};
pub use config::ViewerConfig;
pub use error::{ConfigError, SceneError, SettingsError};
pub use settings::{
    PhysicsSettings, PlayerSettings, RenderSettings, ShadowMode, MAX_SAMPLES_PER_AXIS,
};
