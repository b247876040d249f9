//! Application configuration
//!
//! Settings are stored as pretty printed JSON in the user's config directory.
//! Missing keys take their default value, so config files written by older
//! versions keep loading.

use crate::theme::SystemColor;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolutions offered by the graphics options
pub const RESOLUTIONS: &[&str] = &[
    "640x480",
    "800x600",
    "1024x768",
    "1152x864",
    "1280x720",
    "1280x800",
    "1280x1024",
    "1366x768",
    "1440x900",
    "1600x900",
    "1680x1050",
    "1920x1080",
    "1920x1200",
    "2560x1440",
];

pub const DEFAULT_RESOLUTION: &str = "800x600";
const DEFAULT_SIZE: (u32, u32) = (800, 600);

/// Errors that can occur while reading or writing the config file
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    SerializationError(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::SerializationError(e) => write!(f, "Invalid config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::SerializationError(err)
    }
}

/// How the mouse pointer is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MouseMode {
    Off,
    Hardware,
    #[default]
    Software,
}

impl MouseMode {
    pub const ALL: [MouseMode; 3] = [MouseMode::Off, MouseMode::Hardware, MouseMode::Software];

    pub fn as_str(self) -> &'static str {
        match self {
            MouseMode::Off => "Off",
            MouseMode::Hardware => "Hardware",
            MouseMode::Software => "Software",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }
}

/// Window geometry derived from the config
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoMode {
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
    pub screens: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme: String,
    pub skin: String,
    /// System color name of the skin accent
    pub color: String,
    pub language: String,
    /// `<width>x<height>`
    pub resolution: String,
    pub fullscreen: bool,
    /// Side-by-side screens sharing the window, 1 or 2
    pub screens: u32,
    pub mouse: MouseMode,
    /// Cross-fade between screens
    pub fade: bool,
    pub tabs: bool,
    /// Index into the song sorting names
    pub sorting: usize,
    /// Index into the show-scores names
    pub show_scores: usize,
    pub debug: bool,
    pub themes_dir: PathBuf,
    pub languages_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            theme: "Modern".to_string(),
            skin: "Blue".to_string(),
            color: SystemColor::Blue.as_str().to_string(),
            language: crate::language::DEFAULT_LANGUAGE.to_string(),
            resolution: DEFAULT_RESOLUTION.to_string(),
            fullscreen: false,
            screens: 1,
            mouse: MouseMode::default(),
            fade: true,
            tabs: false,
            sorting: 0,
            show_scores: 1,
            debug: false,
            themes_dir: PathBuf::from("themes"),
            languages_dir: PathBuf::from("languages"),
        }
    }
}

/// Parses `<width>x<height>`
pub fn parse_resolution(value: &str) -> Option<(u32, u32)> {
    let (w, h) = value.trim().split_once(['x', 'X'])?;
    let w = w.trim().parse().ok()?;
    let h = h.trim().parse().ok()?;
    (w > 0 && h > 0).then_some((w, h))
}

impl AppConfig {
    /// Window geometry; an unusable resolution falls back to 800x600 windowed
    pub fn video_mode(&self) -> VideoMode {
        let screens = self.screens.clamp(1, 2);
        match parse_resolution(&self.resolution) {
            Some((width, height)) => VideoMode {
                width,
                height,
                fullscreen: self.fullscreen,
                screens,
            },
            None => {
                log::warn!(
                    "Unknown resolution \"{}\", using {} windowed",
                    self.resolution,
                    DEFAULT_RESOLUTION
                );
                VideoMode {
                    width: DEFAULT_SIZE.0,
                    height: DEFAULT_SIZE.1,
                    fullscreen: false,
                    screens,
                }
            }
        }
    }

    pub fn system_color(&self) -> SystemColor {
        self.color.parse().unwrap_or_else(|e| {
            log::warn!("{}, using Blue", e);
            SystemColor::Blue
        })
    }
}

/// Reads and writes the config file
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: impl AsRef<Path>) -> Self {
        ConfigManager {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// `<config dir>/ultrastar-menu/config.json`, or `./config.json` without a config dir
    pub fn default_location() -> Self {
        let path = dirs::config_dir()
            .map(|dir| dir.join("ultrastar-menu").join("config.json"))
            .unwrap_or_else(|| PathBuf::from("config.json"));
        ConfigManager::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the config; a missing file yields the defaults
    pub fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }
        let json = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Loads the config, logging and replacing an unreadable file with defaults
    pub fn load_or_default(&self) -> AppConfig {
        match self.load() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Could not load {}: {}, using defaults", self.path.display(), e);
                AppConfig::default()
            }
        }
    }

    pub fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }
        let json = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, json)?;
        log::debug!("Config saved to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::new(dir.path().join("nested").join("config.json"));

        let config = AppConfig {
            theme: "Deluxe".to_string(),
            mouse: MouseMode::Hardware,
            screens: 2,
            ..AppConfig::default()
        };
        manager.save(&config).unwrap();
        assert_eq!(manager.load().unwrap(), config);
    }

    #[test]
    fn test_missing_keys_take_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "language": "German", "fade": false }"#).unwrap();

        let config = ConfigManager::new(&path).load().unwrap();
        assert_eq!(config.language, "German");
        assert!(!config.fade);
        assert_eq!(config.resolution, DEFAULT_RESOLUTION);
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        let manager = ConfigManager::new(&path);
        assert!(matches!(manager.load(), Err(ConfigError::SerializationError(_))));
        assert_eq!(manager.load_or_default(), AppConfig::default());
    }

    #[test]
    fn test_unknown_resolution_forces_windowed_default() {
        let config = AppConfig {
            resolution: "huge".to_string(),
            fullscreen: true,
            screens: 5,
            ..AppConfig::default()
        };
        assert_eq!(
            config.video_mode(),
            VideoMode {
                width: 800,
                height: 600,
                fullscreen: false,
                screens: 2,
            }
        );

        let config = AppConfig {
            resolution: "1920x1080".to_string(),
            fullscreen: true,
            ..AppConfig::default()
        };
        assert_eq!(config.video_mode().width, 1920);
        assert!(config.video_mode().fullscreen);
    }

    #[test]
    fn test_mouse_mode_index() {
        assert_eq!(MouseMode::from_index(0), MouseMode::Off);
        assert_eq!(MouseMode::Software.index(), 2);
        assert_eq!(MouseMode::from_index(7), MouseMode::Software);
    }
}
