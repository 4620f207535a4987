//! Editor configuration.
//!
//! Settings are stored as TOML or JSON, chosen by file extension. Missing
//! sections and fields fall back to their defaults.

use std::path::{Path, PathBuf};

use dosekit_core::constants::{
    BED_HEIGHT, BED_WIDTH, DEFAULT_COMPONENT_POSITION, DEFAULT_GROUP_COLOR,
    DEFAULT_TEMPLATE_SIZE, MAX_ZOOM, MIN_ZOOM, SPATIAL_CELL_SIZE, ZOOM_STEP,
};
use serde::{Deserialize, Serialize};

use crate::error::{SettingsError, SettingsResult};

/// Maximum number of entries kept in the recent files list
pub const MAX_RECENT_FILES: usize = 10;

/// Print bed dimensions in pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BedSettings {
    pub width: f64,
    pub height: f64,
}

impl Default for BedSettings {
    fn default() -> Self {
        Self {
            width: BED_WIDTH,
            height: BED_HEIGHT,
        }
    }
}

/// Editor behaviour settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Position of newly added components
    pub default_position: (f64, f64),
    /// Component size used before a component file is loaded
    pub default_template_size: (f64, f64),
    /// Distance moved by one arrow-key nudge
    pub nudge_step: f64,
    pub zoom_step: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Color given to new groups
    pub default_group_color: String,
    /// Cell size of the overlap detection grid
    pub spatial_cell_size: f64,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            default_position: DEFAULT_COMPONENT_POSITION,
            default_template_size: DEFAULT_TEMPLATE_SIZE,
            nudge_step: 1.0,
            zoom_step: ZOOM_STEP,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            default_group_color: DEFAULT_GROUP_COLOR.to_string(),
            spatial_cell_size: SPATIAL_CELL_SIZE,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Recently opened layouts, newest first
    pub recent_files: Vec<PathBuf>,
    pub bed: BedSettings,
    pub editor: EditorSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(SettingsError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

fn positive(key: &str, value: f64) -> SettingsResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::invalid(key, format!("must be positive, got {value}")))
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;
        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        positive("bed.width", self.bed.width)?;
        positive("bed.height", self.bed.height)?;

        let editor = &self.editor;
        let (x, y) = editor.default_position;
        if !x.is_finite() || !y.is_finite() {
            return Err(SettingsError::invalid(
                "editor.default_position",
                "must be finite",
            ));
        }
        positive("editor.default_template_size", editor.default_template_size.0)?;
        positive("editor.default_template_size", editor.default_template_size.1)?;
        positive("editor.nudge_step", editor.nudge_step)?;
        positive("editor.zoom_step", editor.zoom_step)?;
        positive("editor.min_zoom", editor.min_zoom)?;
        positive("editor.max_zoom", editor.max_zoom)?;
        if editor.min_zoom > 1.0 || editor.max_zoom < 1.0 {
            return Err(SettingsError::invalid(
                "editor.min_zoom",
                format!(
                    "zoom range {}..{} must include 1.0",
                    editor.min_zoom, editor.max_zoom
                ),
            ));
        }
        positive("editor.spatial_cell_size", editor.spatial_cell_size)?;
        if editor.default_group_color.trim().is_empty() {
            return Err(SettingsError::invalid(
                "editor.default_group_color",
                "must not be empty",
            ));
        }
        Ok(())
    }

    /// Add file to recent files list
    pub fn add_recent_file(&mut self, path: PathBuf) {
        self.recent_files.retain(|f| f != &path);
        self.recent_files.insert(0, path);
        self.recent_files.truncate(MAX_RECENT_FILES);
    }
}
