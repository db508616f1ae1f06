//! User preferences for the viewer.
//!
//! Loaded from an optional YAML file; the theme can also be forced through
//! the `ELFDEPS_THEME` environment variable. Missing or malformed files fall
//! back to defaults - preferences are never a reason to refuse to start.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Tunable viewer preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Color theme name (`dark` or `light`)
    pub theme: String,
    /// Columns moved by the large horizontal scroll step (`<` / `>`)
    pub scroll_step: usize,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            scroll_step: 3,
        }
    }
}

impl Preferences {
    /// Load preferences from the first discovered config file, then apply
    /// environment overrides.
    #[must_use]
    pub fn load() -> Self {
        let mut prefs = discover_config_file()
            .and_then(|path| Self::load_from(&path).ok())
            .unwrap_or_default();

        if let Ok(theme) = std::env::var("ELFDEPS_THEME") {
            if !theme.is_empty() {
                prefs.theme = theme;
            }
        }

        prefs
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::error::ElfDepsError::io(path, e))?;
        Ok(serde_yaml::from_str(&content)?)
    }
}

/// Search order: `$XDG_CONFIG_HOME/elfdeps/config.yaml`, then
/// `~/.elfdeps.yaml`.
fn discover_config_file() -> Option<PathBuf> {
    let candidates = [
        dirs::config_dir().map(|dir| dir.join("elfdeps").join("config.yaml")),
        dirs::home_dir().map(|dir| dir.join(".elfdeps.yaml")),
    ];

    candidates.into_iter().flatten().find(|path| path.is_file())
}
