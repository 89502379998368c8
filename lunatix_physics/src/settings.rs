//! Tunables for the collision predicates, loaded from `lunatix.toml`.
//!
//! ```toml
//! [collision]
//! ray_distance = 10000.0
//! ray_jitter = 100.0
//! separating_axes = "bounding_box"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

pub const SETTINGS_FILE: &str = "lunatix.toml";

fn default_ray_distance() -> f32 {
    10_000.0
}
fn default_ray_jitter() -> f32 {
    100.0
}

/// Axes tested by the separating-axis step of polygon collision.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SeparatingAxes {
    /// Only the x and y axes, on the polygons' enclosing boxes.
    #[default]
    BoundingBox,
    /// Every edge normal of both polygons.
    EdgeNormals,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct CollisionSettings {
    /// Distance of the far end of the point-in-polygon ray.
    #[serde(default = "default_ray_distance")]
    pub ray_distance: f32,

    /// Random offset in `[0, ray_jitter)` added to the far end on each axis.
    #[serde(default = "default_ray_jitter")]
    pub ray_jitter: f32,

    #[serde(default)]
    pub separating_axes: SeparatingAxes,
}

impl Default for CollisionSettings {
    fn default() -> Self {
        Self {
            ray_distance: default_ray_distance(),
            ray_jitter: default_ray_jitter(),
            separating_axes: SeparatingAxes::default(),
        }
    }
}

impl CollisionSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.ray_distance.is_finite() || self.ray_distance <= 0.0 {
            return Err(ConfigError::InvalidField(
                "collision.ray_distance",
                format!("expected a positive finite number, got {}", self.ray_distance),
            ));
        }
        if !self.ray_jitter.is_finite() || self.ray_jitter < 0.0 {
            return Err(ConfigError::InvalidField(
                "collision.ray_jitter",
                format!("expected a non-negative finite number, got {}", self.ray_jitter),
            ));
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct PhysicsSettings {
    #[serde(default)]
    pub collision: CollisionSettings,
}

impl PhysicsSettings {
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let settings: PhysicsSettings = toml::from_str(src)?;
        settings.collision.validate()?;
        Ok(settings)
    }

    pub fn to_toml_string(&self) -> String {
        // Every field is a plain number or unit enum, serialization cannot fail.
        toml::to_string(self).unwrap_or_default()
    }
}

pub fn load_settings(path: &Path) -> Result<PhysicsSettings, ConfigError> {
    let src = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = PhysicsSettings::from_toml_str(&src)?;
    log::debug!("loaded physics settings from {}", path.display());
    Ok(settings)
}

/// Loads `<root>/lunatix.toml`, or the defaults when the file does not exist.
pub fn load_or_default(root: &Path) -> Result<PhysicsSettings, ConfigError> {
    let path = root.join(SETTINGS_FILE);
    if !path.exists() {
        log::info!("no {} in {}, using default physics settings", SETTINGS_FILE, root.display());
        return Ok(PhysicsSettings::default());
    }
    load_settings(&path)
}
