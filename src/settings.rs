//! Game settings and preferences
//!
//! Loaded from a JSON file next to the binary's working directory. Every
//! field has a default, so partial files are fine.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::highscores::DEFAULT_HIGH_SCORE_FILE;

/// Default settings file name
pub const DEFAULT_SETTINGS_FILE: &str = "skyflap.json";

/// Visual theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    #[default]
    Day,
    Night,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Day => "Day",
            Theme::Night => "Night",
        }
    }

    /// Parse a theme name as given on the command line
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "day" => Some(Theme::Day),
            "night" | "dark" => Some(Theme::Night),
            _ => None,
        }
    }

    pub fn is_night(&self) -> bool {
        *self == Theme::Night
    }

    pub fn from_night(night: bool) -> Self {
        if night { Theme::Night } else { Theme::Day }
    }
}

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Theme at startup (toggle in game with N)
    pub theme: Theme,
    /// High score file
    pub high_score_path: PathBuf,
    /// Log output file (terminal output belongs to the game)
    pub log_path: Option<PathBuf>,
    /// Fixed RNG seed (random when absent)
    pub seed: Option<u64>,

    // === Scenery ===
    pub cloud_count: usize,
    pub star_count: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Day,
            high_score_path: PathBuf::from(DEFAULT_HIGH_SCORE_FILE),
            log_path: Some(PathBuf::from("skyflap.log")),
            seed: None,
            cloud_count: 5,
            star_count: 50,
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json).unwrap_or_else(|| {
                log::warn!("Invalid settings in {}, using defaults", path.display());
                Self::default()
            }),
            Err(_) => {
                log::info!("No settings at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Parse settings JSON, sanitizing out-of-range values
    pub fn from_json(json: &str) -> Option<Self> {
        serde_json::from_str::<Self>(json).ok().map(Self::sanitized)
    }

    fn sanitized(mut self) -> Self {
        self.star_count = self.star_count.min(500);
        self.cloud_count = self.cloud_count.min(20);
        self
    }
}
