//! DoseKit Settings Crate
//!
//! Handles editor configuration and settings persistence.

pub mod config;
pub mod error;
pub mod manager;

pub use config::{BedSettings, Config, EditorSettings, MAX_RECENT_FILES};
pub use error::{SettingsError, SettingsResult};
pub use manager::SettingsManager;
