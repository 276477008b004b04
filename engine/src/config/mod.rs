//! Config Module
//!
//! Player-facing reach-around settings, persisted as JSON.

pub mod color;
pub mod features;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use color::{RAINBOW_PERIOD_SECS, Rgba};
pub use features::{Feature, FeatureToggles};

/// Errors that can occur while loading or saving the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid outline color {0:?} (expected #RRGGBB)")]
    InvalidColor(String),
}

/// Reach-around settings.
///
/// `Default` leaves both strategies off; reach-around is opt-in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReacharoundConfig {
    /// Place blocks below the player while looking straight down
    pub vertical_reacharound: bool,
    /// Place blocks beside the player's footing while looking down and forward
    pub horizontal_reacharound: bool,
    /// Draw the outline of the synthesized target
    pub render_outline: bool,
    /// Outline color as `#RRGGBB`, empty for an animated rainbow
    pub outline_color_hex: String,
    /// Outline alpha (0-255)
    pub outline_alpha: u8,
    /// Host permission for reach-around, resolved by the host before use
    pub server_allows_reacharound: bool,
}

impl Default for ReacharoundConfig {
    fn default() -> Self {
        Self {
            vertical_reacharound: false,
            horizontal_reacharound: false,
            render_outline: true,
            outline_color_hex: String::new(),
            outline_alpha: 102,
            server_allows_reacharound: true,
        }
    }
}

impl ReacharoundConfig {
    /// Read a config file; missing keys take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a config file, or fall back to defaults when it does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            other => other,
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Reject settings that would only fail later, at render time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.outline_color().map(|_| ())
    }

    /// Resolved strategy availability.
    pub fn features(&self) -> FeatureToggles {
        let mut toggles = FeatureToggles::new(self.vertical_reacharound, self.horizontal_reacharound);
        toggles.set_allowed(self.server_allows_reacharound);
        toggles
    }

    /// Configured outline color with alpha applied; `None` means rainbow.
    pub fn outline_color(&self) -> Result<Option<Rgba>, ConfigError> {
        if self.outline_color_hex.trim().is_empty() {
            return Ok(None);
        }
        Rgba::from_hex(&self.outline_color_hex).map(|c| Some(c.with_alpha(self.outline_alpha)))
    }
}
