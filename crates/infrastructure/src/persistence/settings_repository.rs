//! Clock settings loading.
//!
//! Reads settings from the platform-specific config directory:
//! - Linux: ~/.config/worldclock/settings.json
//! - macOS: ~/Library/Application Support/worldclock/settings.json
//! - Windows: %APPDATA%/worldclock/settings.json
//!
//! The file is optional and never written by the application.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;
use worldclock_domain::{ClockSettings, DomainError};

/// Error type for settings operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// IO error while reading the file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid settings JSON.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The file parsed but holds unusable values.
    #[error("Invalid settings: {0}")]
    Invalid(#[from] DomainError),
}

/// Read-only repository for clock settings.
#[derive(Debug, Clone, Default)]
pub struct SettingsRepository {
    path: Option<PathBuf>,
}

impl SettingsRepository {
    /// Creates a repository for the default settings location.
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: dirs::config_dir().map(|p| p.join("worldclock").join("settings.json")),
        }
    }

    /// Creates a repository reading from an explicit file.
    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Returns the path settings are read from, if one could be determined.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Loads settings from disk.
    ///
    /// Returns default settings if no config directory exists or the file
    /// is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// holds values that fail validation.
    pub async fn load(&self) -> Result<ClockSettings, SettingsError> {
        let Some(path) = self.path() else {
            debug!("No config directory, using default settings");
            return Ok(ClockSettings::default());
        };

        let content = match fs::read(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "Settings file not found, using defaults");
                return Ok(ClockSettings::default());
            }
            Err(e) => return Err(e.into()),
        };

        let settings: ClockSettings = serde_json::from_slice(&content)?;
        settings.validate()?;
        debug!(path = %path.display(), "Loaded settings");
        Ok(settings)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;
    use worldclock_domain::{ThemeMode, TimePattern};

    #[tokio::test]
    async fn test_missing_file_yields_defaults() {
        let dir = tempdir().expect("Failed to create temp directory");
        let repo = SettingsRepository::with_path(dir.path().join("settings.json"));

        let settings = repo.load().await.expect("defaults");
        assert_eq!(settings, ClockSettings::default());
    }

    #[tokio::test]
    async fn test_loads_partial_file() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "time_pattern": "legacy", "theme": "light" }"#).unwrap();

        let settings = SettingsRepository::with_path(&path).load().await.unwrap();
        assert_eq!(settings.time_pattern, TimePattern::Legacy);
        assert_eq!(settings.theme, ThemeMode::Light);
        assert_eq!(settings.tick_interval_ms, 1000);
    }

    #[tokio::test]
    async fn test_malformed_file_is_parse_error() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = SettingsRepository::with_path(&path).load().await;
        assert!(matches!(result, Err(SettingsError::Parse(_))));
    }

    #[tokio::test]
    async fn test_invalid_values_are_rejected() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "fallback_zone": "Nowhere/Special" }"#).unwrap();

        let result = SettingsRepository::with_path(&path).load().await;
        assert!(matches!(
            result,
            Err(SettingsError::Invalid(DomainError::UnknownTimeZone(_)))
        ));
    }

    #[test]
    fn test_default_path_ends_with_app_dir() {
        if let Some(path) = SettingsRepository::new().path() {
            assert!(path.ends_with("worldclock/settings.json"));
        }
    }
}
