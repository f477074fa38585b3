//! Zone configuration loading.
//!
//! Zones are declared in a TOML file as an ordered array of `[[zone]]`
//! tables, each with a `name` plus `left`/`top`/`right`/`bottom` pixel
//! coordinates:
//!
//! ```toml
//! [[zone]]
//! name = "entrance"
//! left = 0
//! top = 0
//! right = 320
//! bottom = 240
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::zone::rect::Rect;

/// Error raised while loading the zone configuration.
///
/// Every variant is fatal at startup; no partial zone set is constructed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read zone configuration: {0}")]
    Io(#[from] std::io::Error),
    /// Unparsable TOML or a zone table missing a required field.
    #[error("invalid zone configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("zone configuration defines no zones")]
    NoZones,
}

/// A single `[[zone]]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct ZoneConfig {
    pub name: String,
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl ZoneConfig {
    pub fn rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.right, self.bottom)
    }
}

/// Ordered zone definitions parsed from a TOML source.
#[derive(Debug, Clone, Deserialize)]
pub struct ZonesConfig {
    #[serde(rename = "zone")]
    pub zones: Vec<ZoneConfig>,
}

impl ZonesConfig {
    /// Parse zone definitions from TOML text.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        if config.zones.is_empty() {
            return Err(ConfigError::NoZones);
        }
        Ok(config)
    }

    /// Load zone definitions from a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml(&fs::read_to_string(path)?)
    }
}
