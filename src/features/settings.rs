//! Demo settings persistence
//!
//! Handles saving and loading the ring configuration used by the demo
//! application. Colors are stored as hex strings (`#rrggbb` or `#rrggbbaa`).

use std::path::{Path, PathBuf};

use iced::{Color, Size};
use serde::{Deserialize, Serialize};

use crate::ui::widgets::WidgetConfig;
use crate::ui::widgets::circle_progress::{DEFAULT_DURATION_SECS, DEFAULT_SIZE};

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Ring appearance and entry animation
    #[serde(default)]
    pub ring: RingSettings,
}

/// Ring appearance and behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingSettings {
    pub progress_color: String,
    pub track_color: String,
    pub border_color: String,
    pub background_color: String,
    pub text_color: String,
    /// Pulse the border ring
    pub pulsing: bool,
    /// Target percentage (0 - 100)
    pub target_percent: u32,
    /// Sweep duration in seconds
    pub animation_duration: f32,
    /// Start animating as soon as the window opens
    pub auto_start: bool,
    /// Render the track ring at half opacity
    pub transparent_background: bool,
    /// Widget edge length in logical pixels
    pub size: f32,
}

impl Default for RingSettings {
    fn default() -> Self {
        Self {
            progress_color: "#ff0000".to_string(),
            track_color: "#aaaaaa".to_string(),
            border_color: "#000000".to_string(),
            background_color: "#00000000".to_string(),
            text_color: "#000000".to_string(),
            pulsing: false,
            target_percent: 0,
            animation_duration: DEFAULT_DURATION_SECS,
            auto_start: false,
            transparent_background: false,
            size: DEFAULT_SIZE,
        }
    }
}

impl RingSettings {
    /// Build the widget configuration these settings describe
    pub fn widget_config(&self) -> Result<WidgetConfig, SettingsError> {
        Ok(WidgetConfig::new()
            .progress_color(parse_color(&self.progress_color)?)
            .track_color(parse_color(&self.track_color)?)
            .border_color(parse_color(&self.border_color)?)
            .background_color(parse_color(&self.background_color)?)
            .text_color(parse_color(&self.text_color)?)
            .pulsing(self.pulsing)
            .target_percent(self.target_percent)
            .animation_duration(self.animation_duration)
            .auto_start(self.auto_start)
            .transparent_background(self.transparent_background)
            .bounds(Size::new(self.size, self.size)))
    }
}

fn parse_color(hex: &str) -> Result<Color, SettingsError> {
    hex.parse::<Color>()
        .map_err(|_| SettingsError::InvalidColor(hex.to_string()))
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "circle-progress", "CircleProgress")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::default();
        };

        match Self::load_from_file(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::debug!("Using default settings ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    Io(String),
    Parse(String),
    InvalidColor(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
            SettingsError::InvalidColor(hex) => write!(f, "Invalid color: {}", hex),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("circle-progress-{}-{}", std::process::id(), name))
            .join("settings.json")
    }

    #[test]
    fn test_default_ring_matches_widget_defaults() {
        let config = RingSettings::default().widget_config().unwrap();
        assert_eq!(config, WidgetConfig::default());
    }

    #[test]
    fn test_parse_hex_colors() {
        assert_eq!(parse_color("#ff0000"), Ok(Color::from_rgb8(0xff, 0, 0)));
        assert_eq!(parse_color("#00000000"), Ok(Color::TRANSPARENT));
        let translucent = parse_color("#ffffff80").unwrap();
        assert!((translucent.a - 0.5).abs() < 0.01);

        for bad in ["", "#ggg000", "#12345", "red"] {
            assert_eq!(
                parse_color(bad),
                Err(SettingsError::InvalidColor(bad.to_string()))
            );
        }
    }

    #[test]
    fn test_invalid_color_is_reported() {
        let ring = RingSettings {
            track_color: "not-a-color".to_string(),
            ..Default::default()
        };
        assert_eq!(
            ring.widget_config(),
            Err(SettingsError::InvalidColor("not-a-color".to_string()))
        );
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("roundtrip");
        let settings = Settings {
            ring: RingSettings {
                pulsing: true,
                target_percent: 64,
                animation_duration: 3.5,
                ..Default::default()
            },
        };

        settings.save_to_file(&path).unwrap();
        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded, settings);

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "ring": { "target_percent": 20 } }"#).unwrap();
        assert_eq!(settings.ring.target_percent, 20);
        assert_eq!(settings.ring.animation_duration, DEFAULT_DURATION_SECS);
        assert_eq!(settings.ring.progress_color, "#ff0000");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = Settings::load_from_file(&temp_path("missing"));
        assert!(matches!(result, Err(SettingsError::Io(_))));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let path = temp_path("malformed");
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).unwrap();
        }
        std::fs::write(&path, "{ not json").unwrap();

        let result = Settings::load_from_file(&path);
        assert!(matches!(result, Err(SettingsError::Parse(_))));

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }
}
