//! TOML persistence for [`AppSettings`].

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use crate::{AppSettings, SettingsError};

/// Settings file used when no override is configured.
pub const DEFAULT_SETTINGS_PATH: &str = "data/settings.toml";

/// Environment variable that overrides [`DEFAULT_SETTINGS_PATH`].
pub const SETTINGS_PATH_ENV: &str = "ALERTA_VECINAL_SETTINGS";

/// Settings bound to the file they were loaded from.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    settings: AppSettings,
}

impl SettingsStore {
    /// Resolves the settings path from the environment, falling back to
    /// [`DEFAULT_SETTINGS_PATH`].
    #[must_use]
    pub fn default_path() -> PathBuf {
        resolve_path(std::env::var_os(SETTINGS_PATH_ENV))
    }

    /// Loads settings from `path`. A missing file yields the defaults; the
    /// file is only created on [`save`](Self::save).
    ///
    /// # Errors
    ///
    /// * If the file exists but cannot be read
    /// * If the file is not valid settings TOML
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path = path.into();
        let settings = match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No settings at {}, using defaults", path.display());
                AppSettings::default()
            }
            Err(e) => return Err(e.into()),
        };
        log::info!("Loaded settings from {}", path.display());
        Ok(Self { path, settings })
    }

    /// Writes the current settings, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// * If the settings cannot be serialized
    /// * If the file or its directory cannot be written
    pub fn save(&self) -> Result<(), SettingsError> {
        let content = toml::to_string(&self.settings)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, content)?;
        log::info!("Saved settings to {}", self.path.display());
        Ok(())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub const fn settings_mut(&mut self) -> &mut AppSettings {
        &mut self.settings
    }
}

/// Picks the override path when one is set and non-empty.
fn resolve_path(value: Option<OsString>) -> PathBuf {
    value
        .filter(|v| !v.is_empty())
        .map_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH), PathBuf::from)
}
