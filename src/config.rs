//! Persisted operator settings.
//!
//! Loaded once at process start by the shell and passed into core
//! calls as immutable snapshots. The core never reads or writes this
//! structure itself.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Operator-facing settings persisted between runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Brightness slider value, 0-100 (50 is neutral).
    pub brightness: u8,
    /// Render position-number labels on the collage.
    pub show_position_labels: bool,
    /// Destination link for uploads. Opaque to the core; the shell's
    /// sharing integration consumes it.
    pub drive_link: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            brightness: 50,
            show_position_labels: true,
            drive_link: String::new(),
        }
    }
}

impl Settings {
    /// Validates the settings values.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.brightness > 100 {
            return Err(SettingsError::InvalidBrightness(self.brightness));
        }
        Ok(())
    }

    /// Loads settings from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SettingsError::FileReadError(e.to_string()))?;
        let settings: Settings =
            toml::from_str(&content).map_err(|e| SettingsError::ParseError(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Writes settings to a TOML file.
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| SettingsError::ParseError(e.to_string()))?;
        std::fs::write(path.as_ref(), content)
            .map_err(|e| SettingsError::FileWriteError(e.to_string()))?;
        Ok(())
    }
}

/// Settings validation and persistence errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid brightness {0} (must be 0-100)")]
    InvalidBrightness(u8),
    #[error("failed to read settings file: {0}")]
    FileReadError(String),
    #[error("failed to write settings file: {0}")]
    FileWriteError(String),
    #[error("failed to parse settings file: {0}")]
    ParseError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.brightness, 50);
        assert!(settings.show_position_labels);
        assert!(settings.drive_link.is_empty());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_brightness_out_of_range() {
        let settings = Settings {
            brightness: 101,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidBrightness(101))
        ));
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let settings = Settings {
            brightness: 72,
            show_position_labels: false,
            drive_link: "https://example.invalid/folder".to_string(),
        };

        let path = std::env::temp_dir().join("gaze_collage_settings_test.toml");
        settings.to_file(&path).unwrap();
        let loaded = Settings::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded.brightness, 72);
        assert!(!loaded.show_position_labels);
        assert_eq!(loaded.drive_link, settings.drive_link);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let loaded: Settings = toml::from_str("brightness = 30").unwrap();
        assert_eq!(loaded.brightness, 30);
        assert!(loaded.show_position_labels);
    }
}
