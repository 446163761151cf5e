//! User settings loaded from a TOML file.
//!
//! Settings live in the platform-specific config folder:
//! - macOS: ~/Library/Application Support/com.flashdeck.Flashdeck/
//! - Windows: %APPDATA%/flashdeck/Flashdeck/config/
//! - Linux: ~/.config/flashdeck/
//!
//! Only defaults for new sessions are stored here. Decks and learned flags are
//! never written back.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use flashdeck_model::StudyMode;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "flashdeck";
const APP_NAME: &str = "Flashdeck";
const CONFIG_FILENAME: &str = "settings.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub study: StudySettings,
    pub display: DisplaySettings,
}

/// Defaults for `flashdeck study` when flags are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudySettings {
    pub mode: StudyMode,
    pub shuffle: bool,
    pub only_unlearned: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Start with the dark palette.
    pub dark_mode: bool,
}

/// Get the path to the settings file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Load settings from `path`, or from the default location when `None`.
///
/// Falls back to defaults when the file is missing or unreadable.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match settings_path() {
            Some(path) => path,
            None => {
                tracing::warn!("could not determine settings path, using defaults");
                return Settings::default();
            }
        },
    };
    load_settings_from(&path)
}

pub fn load_settings_from(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                tracing::info!("loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                tracing::warn!(
                    "failed to parse settings file {}: {}, using defaults",
                    path.display(),
                    e
                );
                Settings::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("no settings file at {}, using defaults", path.display());
            Settings::default()
        }
        Err(e) => {
            tracing::warn!(
                "failed to read settings file {}: {}, using defaults",
                path.display(),
                e
            );
            Settings::default()
        }
    }
}
