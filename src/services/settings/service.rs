use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;

use crate::models::settings::LayoutSettings;

const SETTINGS_FILE: &str = "layout.toml";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to access settings file: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid settings: {0}")]
    Invalid(String),
}

pub type SettingsResult<T> = Result<T, SettingsError>;

/// Reads and writes layout settings as TOML.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service for `layout.toml` in the platform config directory.
    pub fn at_default_location() -> Option<Self> {
        ProjectDirs::from("com", "Ken24T", "AgendaLayout")
            .map(|dirs| Self::new(dirs.config_dir().join(SETTINGS_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, falling back to defaults when the file does not exist.
    pub fn load(&self) -> SettingsResult<LayoutSettings> {
        if !self.path.exists() {
            log::info!(
                "No settings file at {}, using defaults",
                self.path.display()
            );
            return Ok(LayoutSettings::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let settings: LayoutSettings = toml::from_str(&content)?;
        settings.validate().map_err(SettingsError::Invalid)?;

        log::debug!("Loaded settings from {}", self.path.display());
        Ok(settings)
    }

    /// Load settings, logging and discarding any error.
    pub fn load_or_default(&self) -> LayoutSettings {
        match self.load() {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load settings: {}, using defaults", e);
                LayoutSettings::default()
            }
        }
    }

    pub fn save(&self, settings: &LayoutSettings) -> SettingsResult<()> {
        settings.validate().map_err(SettingsError::Invalid)?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, toml::to_string_pretty(settings)?)?;

        log::info!("Saved settings to {}", self.path.display());
        Ok(())
    }
}
