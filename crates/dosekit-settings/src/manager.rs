//! Settings file location and lifecycle.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{SettingsError, SettingsResult};

const APP_DIR: &str = "dosekit";
const CONFIG_FILE: &str = "config.toml";

/// Owns the active configuration and the file it was read from.
#[derive(Debug, Clone)]
pub struct SettingsManager {
    path: PathBuf,
    config: Config,
}

impl SettingsManager {
    /// Platform configuration directory for the application.
    pub fn config_dir() -> SettingsResult<PathBuf> {
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no config or home directory".to_string())
            })?;
        Ok(base.join(APP_DIR))
    }

    /// Default settings file path.
    pub fn default_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Loads the settings at the default location, or defaults when the
    /// file does not exist yet.
    pub fn load_default() -> SettingsResult<Self> {
        Self::load_or_default(&Self::default_path()?)
    }

    /// Loads the settings at `path`, or defaults when the file does not
    /// exist. An existing but invalid file is an error.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        let config = if path.exists() {
            let config = Config::load_from_file(path)?;
            tracing::info!("Loaded settings from {}", path.display());
            config
        } else {
            tracing::debug!("No settings at {}, using defaults", path.display());
            Config::default()
        };
        Ok(Self {
            path: path.to_path_buf(),
            config,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Writes the settings, creating the directory if needed.
    pub fn save(&self) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SettingsError::ConfigDirectory(format!("{}: {}", parent.display(), e))
            })?;
        }
        self.config.save_to_file(&self.path)?;
        tracing::info!("Saved settings to {}", self.path.display());
        Ok(())
    }

    /// Records a layout in the recent files list and saves.
    pub fn record_recent_file(&mut self, layout: impl Into<PathBuf>) -> SettingsResult<()> {
        self.config.add_recent_file(layout.into());
        self.save()
    }
}
