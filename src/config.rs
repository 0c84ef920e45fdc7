//! Gallery Configuration
//!
//! Optional TOML file in the platform config directory:
//! - **Linux**: `~/.config/component-gallery/gallery.toml`
//! - **macOS**: `~/Library/Application Support/com.cyenx.component-gallery/gallery.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\cyenx\component-gallery\config\gallery.toml`
//!
//! A missing file is seeded with the defaults. A broken file is logged and
//! ignored in favor of the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::constants::{
    CONFIG_FILE_NAME, CONSOLE_LOG_CAPACITY, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH,
};
use crate::domain::color::StyleScope;
use crate::domain::places::default_places;
use crate::error::{Error, Result};

/// User-tunable gallery settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub window_width: f32,
    pub window_height: f32,
    /// Console ring buffer size
    pub log_capacity: usize,
    /// Color variant name handed to the gallery button
    pub button_color: String,
    pub style_scope: StyleScope,
    /// Items shown in the ListGroup
    pub places: Vec<String>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            log_capacity: CONSOLE_LOG_CAPACITY,
            button_color: "primary".to_string(),
            style_scope: StyleScope::Global,
            places: default_places().iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl GalleryConfig {
    /// Parse and validate a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the window or console cannot work with
    pub fn validate(&self) -> Result<()> {
        if !(self.window_width > 0.0 && self.window_height > 0.0) {
            return Err(Error::Invalid {
                message: format!(
                    "window size must be positive, got {}x{}",
                    self.window_width, self.window_height
                ),
            });
        }
        if self.log_capacity == 0 {
            return Err(Error::Invalid {
                message: "log_capacity must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Load from a specific path; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Write this config as TOML to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Load from the platform config dir, falling back to defaults on any error
    pub fn load_or_default() -> LoadedConfig {
        match config_file_path() {
            Ok(path) => Self::load_or_seed(&path),
            Err(e) => {
                tracing::warn!(error = %e, "config directory unavailable, using defaults");
                LoadedConfig::fallback(format!("config directory unavailable: {e}"))
            }
        }
    }

    /// Load `path`; write the defaults there first when it does not exist yet
    pub fn load_or_seed(path: &Path) -> LoadedConfig {
        if !path.exists() {
            let config = Self::default();
            return match config.save_to(path) {
                Ok(()) => {
                    tracing::info!(path = %path.display(), "wrote default config");
                    LoadedConfig { config, issue: None }
                }
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "could not write default config"
                    );
                    LoadedConfig {
                        config,
                        issue: Some(format!("could not write {}: {e}", path.display())),
                    }
                }
            };
        }

        match Self::load_from(path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "config loaded");
                LoadedConfig { config, issue: None }
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring invalid config");
                LoadedConfig::fallback(format!("ignoring {}: {e}", path.display()))
            }
        }
    }
}

/// Config picked at startup, plus a note when defaults had to stand in
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: GalleryConfig,
    /// Shown as a warning line in the gallery console
    pub issue: Option<String>,
}

impl LoadedConfig {
    fn fallback(issue: String) -> Self {
        Self {
            config: GalleryConfig::default(),
            issue: Some(issue),
        }
    }
}

/// Resolve the config file location
pub fn config_file_path() -> Result<PathBuf> {
    let Some(project_dirs) = ProjectDirs::from("com", "cyenx", "component-gallery") else {
        return Err(Error::Invalid {
            message: "Could not determine project directories".to_string(),
        });
    };

    Ok(project_dirs.config_dir().join(CONFIG_FILE_NAME))
}
