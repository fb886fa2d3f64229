//! Viewer configuration loaded from JSON.
//!
//! Every section and field is optional; anything left out keeps its default.
//!
//! ```json
//! {
//!   "render": { "width": 120, "height": 40, "aa_sample_sqrt": 3, "shadow_mode": "surface_normal" },
//!   "physics": { "gravity": -4.9 }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, PhysicsSettings, PlayerSettings, RenderSettings};

/// Everything the viewer needs besides the scene itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub render: RenderSettings,
    pub physics: PhysicsSettings,
    pub player: PlayerSettings,
}

impl ViewerConfig {
    /// Load and validate a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        log::info!("Loaded viewer config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a configuration from a JSON string.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: ViewerConfig = serde_json::from_str(text)?;
        config.render.validate()?;

        if config.render.aa_sample_sqrt <= 0 {
            log::warn!(
                "aa_sample_sqrt = {} is not positive, using 1 sample per cell",
                config.render.aa_sample_sqrt
            );
        }

        Ok(config)
    }

    /// Serialize to pretty JSON (used to dump the effective config).
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
