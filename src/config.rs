// User configuration, stored as RON

use crate::sketch::click::DOUBLE_CLICK_THRESHOLD_MS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "POLYSKETCH_CONFIG";

const DEFAULT_NOTIFICATION_CAPACITY: usize = 64;

/// Config error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("RON parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("RON serialization error: {0}")]
    Serialize(#[from] ron::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// An RGBA colour, non-premultiplied
pub type Rgba = [u8; 4];

/// Canvas appearance used by the desktop renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasStyle {
    pub polygon_fill: Rgba,
    pub polygon_stroke: Rgba,
    pub polygon_stroke_width: f32,
    pub vertex_color: Rgba,
    pub vertex_radius: f32,
    pub path_color: Rgba,
    pub path_width: f32,
    pub preview_color: Rgba,
    pub preview_width: f32,
    pub preview_dash: f32,
}

impl Default for CanvasStyle {
    fn default() -> Self {
        Self {
            polygon_fill: [0, 150, 255, 77],
            polygon_stroke: [0, 0, 0, 255],
            polygon_stroke_width: 2.0,
            vertex_color: [255, 0, 0, 255],
            vertex_radius: 4.0,
            path_color: [0, 0, 255, 255],
            path_width: 2.0,
            preview_color: [128, 128, 128, 255],
            preview_width: 1.0,
            preview_dash: 5.0,
        }
    }
}

/// Session settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Maximum gap between two clicks of a double-click
    pub double_click_threshold_ms: u64,
    /// Cap on undoable commands; `None` keeps the full history
    pub history_limit: Option<usize>,
    /// Ring buffer size for change notifications
    pub notification_capacity: usize,
    pub canvas: CanvasStyle,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            double_click_threshold_ms: DOUBLE_CLICK_THRESHOLD_MS,
            history_limit: None,
            notification_capacity: DEFAULT_NOTIFICATION_CAPACITY,
            canvas: CanvasStyle::default(),
        }
    }
}

impl SketchConfig {
    /// Parse and validate a RON document
    pub fn from_ron_str(ron_data: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(ron_data)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let ron_data = std::fs::read_to_string(path)?;
        Self::from_ron_str(&ron_data)
    }

    /// Load from [`SketchConfig::default_path`], falling back to defaults
    ///
    /// A missing file is normal; a broken one is logged and ignored.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            tracing::debug!("no config directory available, using defaults");
            return Self::default();
        };
        Self::load_or_default_from(&path)
    }

    pub fn load_or_default_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Self::default();
        }

        match Self::load(path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring config file");
                Self::default()
            }
        }
    }

    /// `$POLYSKETCH_CONFIG`, else `<config dir>/polysketch/config.ron`
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("polysketch").join("config.ron"))
    }

    /// Serialize to pretty RON, e.g. to write a starter config
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }

    /// Reject values the session cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.double_click_threshold_ms == 0 {
            return Err(ConfigError::Invalid(
                "double_click_threshold_ms must be greater than 0".into(),
            ));
        }
        if self.history_limit == Some(0) {
            return Err(ConfigError::Invalid(
                "history_limit must be at least 1 (or None for unlimited)".into(),
            ));
        }
        if self.notification_capacity == 0 {
            return Err(ConfigError::Invalid(
                "notification_capacity must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
