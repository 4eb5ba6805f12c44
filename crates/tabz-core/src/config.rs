// ABOUTME: Layout configuration handling.
// ABOUTME: Reads the per-user TOML settings file and seeds it with defaults on first run.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings consumed by the layout engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Orientation of the root split (true = panels left-to-right, vertical handles)
    pub first_split_vertical: bool,

    /// Smallest size a panel may be dragged down to along a split axis
    pub min_panel_size: f32,
}

impl LayoutSettings {
    /// Handle orientation for splits of a group at `depth`; alternates per level
    pub fn vertical_at(&self, depth: usize) -> bool {
        self.first_split_vertical ^ (depth % 2 == 1)
    }
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            first_split_vertical: true,
            min_panel_size: 20.0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Layout engine settings
    pub layout: LayoutSettings,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot access layout settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Layout settings are not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Cannot encode layout settings: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error("min_panel_size must be a finite, non-negative number, got {0}")]
    InvalidMinPanelSize(f32),
}

impl Config {
    /// Per-user settings file, `<config dir>/tabz/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.extend(["tabz", "config.toml"]);
        Some(path)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(&std::fs::read_to_string(path)?)?;
        config.check()?;
        Ok(config)
    }

    /// Load settings from `path`, writing the defaults there first if the
    /// file does not exist yet.
    pub fn load_or_init(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            return Self::load(path);
        }
        let config = Self::default();
        config.save(path)?;
        tracing::info!("Wrote default layout settings to {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        self.check()?;
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    fn check(&self) -> Result<(), ConfigError> {
        let min = self.layout.min_panel_size;
        if !min.is_finite() || min < 0.0 {
            return Err(ConfigError::InvalidMinPanelSize(min));
        }
        Ok(())
    }
}
